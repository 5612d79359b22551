use std::path::PathBuf;
use thiserror::Error;

/// Engine output did not have the shape a required field needs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Engine output ended before line {line} ({expected})")]
    MissingLine { line: usize, expected: &'static str },

    #[error("No structure found on line {line}: '{content}'")]
    MissingStructure { line: usize, content: String },

    #[error("Invalid energy on line {line} (value: '{value}')")]
    InvalidEnergy { line: usize, value: String },

    #[error("Invalid dot-bracket structure on line {line}: '{structure}'")]
    InvalidStructure { line: usize, structure: String },

    #[error("Structure '{structure}' has length {found}, expected {expected}")]
    LengthMismatch {
        structure: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid dot plot entry on line {line}: '{content}'")]
    InvalidDotPlotEntry { line: usize, content: String },

    #[error("Base pair ({i}, {j}) with probability {probability} is invalid for length {length}")]
    PairOutOfRange {
        i: usize,
        j: usize,
        probability: f64,
        length: usize,
    },

    #[error("Dot plot '{path}' could not be read: {message}", path = path.display())]
    UnreadableDotPlot { path: PathBuf, message: String },

    #[error("Invalid score on line {line} (value: '{value}')")]
    InvalidScore { line: usize, value: String },
}
