use std::path::PathBuf;
use thiserror::Error;
use vienna::core::io::bpp_csv::BppCsvError;
use vienna::engine::error::EngineError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to export base-pair probabilities: {0}")]
    Export(#[from] BppCsvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("{failed} of {total} inputs failed")]
    PartialFailure { failed: usize, total: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
