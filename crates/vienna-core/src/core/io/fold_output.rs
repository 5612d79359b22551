//! Parsing of `RNAfold -p` / `RNAcofold -p` stdout.
//!
//! Typical output for a single sequence read from stdin:
//!
//! ```text
//! GGGGAAAACCCC
//! ((((....)))) ( -5.40)
//! ((((....)))) [ -5.73]
//! ((((....)))) { -5.40 d=0.79}
//!  frequency of mfe structure in ensemble 0.755889; ensemble diversity 0.56
//! ```
//!
//! Only positions are relied upon: the structure and energy on line 2 and the
//! final token of the last line. The wording of the last line differs between
//! engine releases and is ignored.

use super::ParseError;
use crate::core::alphabet::{STRAND_SEPARATOR, is_dot_bracket};
use tracing::warn;

const STRUCTURE_LINE: usize = 2;

/// Fields extracted from the engine's stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutput {
    pub structure: String,
    pub mfe: f64,
    pub ensemble_diversity: f64,
}

/// Parses single-strand output and checks the structure length against the
/// folded sequence.
pub fn parse_fold_output(stdout: &str, sequence_len: usize) -> Result<FoldOutput, ParseError> {
    let output = parse_raw(stdout)?;
    check_length(&output.structure, sequence_len)?;
    check_dot_bracket(&output.structure)?;
    Ok(output)
}

/// Parses two-strand output. The returned structure always carries the strand
/// separator at index `first_len`, whether or not the engine printed it.
pub fn parse_cofold_output(
    stdout: &str,
    first_len: usize,
    second_len: usize,
) -> Result<FoldOutput, ParseError> {
    let mut output = parse_raw(stdout)?;
    let combined: String = output
        .structure
        .chars()
        .filter(|&c| c != STRAND_SEPARATOR)
        .collect();
    check_length(&combined, first_len + second_len)?;
    output.structure = insert_separator(&combined, first_len);
    check_dot_bracket(&output.structure)?;
    Ok(output)
}

/// Re-inserts the strand separator into a combined structure at character
/// index `split_at`.
pub fn insert_separator(structure: &str, split_at: usize) -> String {
    let mut result = String::with_capacity(structure.len() + 1);
    for (idx, c) in structure.chars().enumerate() {
        if idx == split_at {
            result.push(STRAND_SEPARATOR);
        }
        result.push(c);
    }
    if split_at >= structure.chars().count() {
        result.push(STRAND_SEPARATOR);
    }
    result
}

fn parse_raw(stdout: &str) -> Result<FoldOutput, ParseError> {
    let line = stdout
        .lines()
        .nth(STRUCTURE_LINE - 1)
        .ok_or(ParseError::MissingLine {
            line: STRUCTURE_LINE,
            expected: "structure and energy",
        })?;

    let trimmed = line.trim_start();
    let (structure, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    if structure.is_empty() {
        return Err(ParseError::MissingStructure {
            line: STRUCTURE_LINE,
            content: line.to_string(),
        });
    }

    let mfe = parse_energy(rest).ok_or_else(|| ParseError::InvalidEnergy {
        line: STRUCTURE_LINE,
        value: rest.trim().to_string(),
    })?;

    Ok(FoldOutput {
        structure: structure.to_string(),
        mfe,
        ensemble_diversity: parse_ensemble_statistic(stdout),
    })
}

/// Reads the energy from the parenthesised group after the structure token.
/// Both `(-5.40)` and `( -5.40)` are accepted.
fn parse_energy(rest: &str) -> Option<f64> {
    let open = rest.rfind('(')?;
    let close = rest[open..].find(')')? + open;
    rest[open + 1..close].trim().parse().ok()
}

fn parse_ensemble_statistic(stdout: &str) -> f64 {
    let token = stdout
        .trim_end_matches(['\n', '\r'])
        .lines()
        .last()
        .and_then(|line| line.split_whitespace().last());
    match token.map(|t| (t, t.parse::<f64>())) {
        Some((_, Ok(value))) => value,
        Some((t, Err(_))) => {
            warn!(token = t, "Ensemble statistic is not numeric, defaulting to 0.0.");
            0.0
        }
        None => {
            warn!("Engine output has no ensemble statistic line, defaulting to 0.0.");
            0.0
        }
    }
}

fn check_length(structure: &str, expected: usize) -> Result<(), ParseError> {
    let found = structure.chars().count();
    if found != expected {
        return Err(ParseError::LengthMismatch {
            structure: structure.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

fn check_dot_bracket(structure: &str) -> Result<(), ParseError> {
    if !is_dot_bracket(structure) {
        return Err(ParseError::InvalidStructure {
            line: STRUCTURE_LINE,
            structure: structure.to_string(),
        });
    }
    Ok(())
}
