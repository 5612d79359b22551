use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Explicit executables, keyed by operation.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileToolPaths {
    pub fold: Option<PathBuf>,
    pub cofold: Option<PathBuf>,
    pub inverse: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEngineConfig {
    pub bin_dir: Option<PathBuf>,
    pub scratch_root: Option<PathBuf>,
    pub dangles: Option<u8>,
    pub no_lonely_pairs: Option<bool>,
    pub temperature: Option<f64>,
    pub tools: Option<FileToolPaths>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileInverseConfig {
    pub num_solutions: Option<usize>,
    pub final_cost: Option<f64>,
}

/// Partial configuration as written in a TOML file. Every field is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub engine: Option<FileEngineConfig>,
    pub inverse: Option<FileInverseConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
