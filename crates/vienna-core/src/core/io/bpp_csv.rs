//! CSV export of base-pair probabilities (`i,j,probability`).

use crate::core::models::BasePairProb;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BppCsvError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("CSV I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn write_bpp<W: Write>(pairs: &[BasePairProb], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for pair in pairs {
        wtr.serialize(pair)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_bpp<R: Read>(reader: R) -> Result<Vec<BasePairProb>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}

pub fn write_bpp_to_path(pairs: &[BasePairProb], path: &Path) -> Result<(), BppCsvError> {
    let file = std::fs::File::create(path)?;
    write_bpp(pairs, file).map_err(|e| BppCsvError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

pub fn read_bpp_from_path(path: &Path) -> Result<Vec<BasePairProb>, BppCsvError> {
    let file = std::fs::File::open(path)?;
    read_bpp(file).map_err(|e| BppCsvError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
