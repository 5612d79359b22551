//! Alphabets accepted by the folding engine and the checks applied to caller
//! input before any process is started.

use phf::{Set, phf_set};
use thiserror::Error;

/// Strand separator understood by `RNAcofold`.
pub const STRAND_SEPARATOR: char = '&';

/// IUPAC nucleotide codes, either case. `T` is accepted because the engine
/// treats it as `U`.
static NUCLEOTIDES: Set<char> = phf_set! {
    'A', 'C', 'G', 'U', 'T', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N',
    'a', 'c', 'g', 'u', 't', 'r', 'y', 's', 'w', 'k', 'm', 'b', 'd', 'h', 'v', 'n',
};

static STRUCTURE_SYMBOLS: Set<char> = phf_set! { '(', ')', '.' };

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("{what} must not be empty")]
    Empty { what: &'static str },
    #[error("{what} contains invalid character {found:?} at position {position}")]
    InvalidCharacter {
        what: &'static str,
        found: char,
        position: usize,
    },
    #[error("expected exactly one '&' separating two strands, found {found}")]
    SeparatorCount { found: usize },
    #[error("strand {strand} of the complex is empty")]
    EmptyStrand { strand: usize },
    #[error("unbalanced structure: {0}")]
    Unbalanced(String),
    #[error("{what} has length {found}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

fn check_chars(text: &str, what: &'static str, allowed: &Set<char>) -> Result<(), AlphabetError> {
    if text.is_empty() {
        return Err(AlphabetError::Empty { what });
    }
    match text.chars().enumerate().find(|(_, c)| !allowed.contains(c)) {
        Some((position, found)) => Err(AlphabetError::InvalidCharacter {
            what,
            found,
            position: position + 1,
        }),
        None => Ok(()),
    }
}

/// Validates a single-strand sequence.
pub fn validate_sequence(sequence: &str) -> Result<(), AlphabetError> {
    check_chars(sequence, "sequence", &NUCLEOTIDES)
}

/// Validates a two-strand complex and splits it at the separator.
pub fn split_complex(sequence_pair: &str) -> Result<(&str, &str), AlphabetError> {
    if sequence_pair.is_empty() {
        return Err(AlphabetError::Empty {
            what: "sequence pair",
        });
    }
    let found = sequence_pair.matches(STRAND_SEPARATOR).count();
    if found != 1 {
        return Err(AlphabetError::SeparatorCount { found });
    }
    let (first, second) = sequence_pair
        .split_once(STRAND_SEPARATOR)
        .ok_or(AlphabetError::SeparatorCount { found: 0 })?;
    if first.is_empty() {
        return Err(AlphabetError::EmptyStrand { strand: 1 });
    }
    if second.is_empty() {
        return Err(AlphabetError::EmptyStrand { strand: 2 });
    }
    validate_sequence(first)?;
    validate_sequence(second)?;
    Ok((first, second))
}

/// Validates a single-strand dot-bracket structure, including bracket balance.
pub fn validate_structure(structure: &str) -> Result<(), AlphabetError> {
    check_chars(structure, "structure", &STRUCTURE_SYMBOLS)?;
    let mut depth: usize = 0;
    for (idx, c) in structure.chars().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    AlphabetError::Unbalanced(format!("unmatched ')' at position {}", idx + 1))
                })?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AlphabetError::Unbalanced(format!("{} unclosed '('", depth)));
    }
    Ok(())
}

/// Validates an `RNAinverse` start constraint against its target structure.
pub fn validate_constraint(constraint: &str, structure: &str) -> Result<(), AlphabetError> {
    check_chars(constraint, "constraint", &NUCLEOTIDES)?;
    let expected = structure.chars().count();
    let found = constraint.chars().count();
    if expected != found {
        return Err(AlphabetError::LengthMismatch {
            what: "constraint",
            expected,
            found,
        });
    }
    Ok(())
}

/// Returns `true` if `structure` uses only `(`, `)`, `.` and `&`, with the
/// parentheses balanced across strands.
pub fn is_dot_bracket(structure: &str) -> bool {
    validate_structure(&structure.replace(STRAND_SEPARATOR, ".")).is_ok()
}
