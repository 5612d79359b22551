use super::config::{ConfigError, Tool};
use crate::core::alphabet::AlphabetError;
use crate::core::io::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{tool} was not found in the configured locations or on PATH")]
    EngineNotFound { tool: Tool },

    #[error("{tool} exited with code {exit_code}: {stderr}")]
    EngineExecutionFailed {
        tool: Tool,
        exit_code: i32,
        stderr: String,
    },

    #[error("Failed to parse engine output: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<AlphabetError> for EngineError {
    fn from(e: AlphabetError) -> Self {
        EngineError::InvalidInput(e.to_string())
    }
}

impl EngineError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        EngineError::Io {
            context: context.into(),
            source,
        }
    }
}
