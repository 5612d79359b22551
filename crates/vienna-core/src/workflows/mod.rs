//! # Workflows Module
//!
//! The public operations. Each one validates its input, runs exactly one
//! engine process inside its own scratch directory, and parses the result.
//!
//! - **Client** ([`client`]) - [`Vienna`], which owns the configuration, the
//!   process runner and the per-tool detection cache
//! - **Single-strand folding** ([`fold`]) - `fold`, `folded_structure`,
//!   `does_sequence_fold_to`, batch folding
//! - **Two-strand folding** ([`cofold`]) - `cofold`
//! - **Inverse design** ([`inverse`]) - `inverse_fold`
//!
//! The free functions re-exported here use a lazily built, process-wide client
//! with the default configuration. Build a [`Vienna`] explicitly to control
//! tool locations, folding parameters or the process runner.

pub mod client;
pub mod cofold;
pub mod fold;
pub mod inverse;

pub use client::Vienna;
pub use inverse::DEFAULT_MAX_SOLUTIONS;

use crate::core::models::{FoldResult, InverseResult};
use crate::engine::error::EngineError;

/// Folds `sequence` with `RNAfold`, optionally extracting pair probabilities.
pub fn fold(sequence: &str, want_probabilities: bool) -> Result<FoldResult, EngineError> {
    Vienna::shared().fold(sequence, want_probabilities)
}

/// Folds two strands joined by `&` with `RNAcofold`.
pub fn cofold(sequence_pair: &str) -> Result<FoldResult, EngineError> {
    Vienna::shared().cofold(sequence_pair)
}

/// Designs sequences folding into `target_structure` with `RNAinverse`.
pub fn inverse_fold(
    target_structure: &str,
    constraint: &str,
    max_solutions: usize,
) -> Result<InverseResult, EngineError> {
    Vienna::shared().inverse_fold(target_structure, constraint, max_solutions)
}

/// MFE structure of `sequence` in dot-bracket notation.
pub fn folded_structure(sequence: &str) -> Result<String, EngineError> {
    Vienna::shared().folded_structure(sequence)
}

/// Whether the MFE structure of `sequence` equals `target_structure`.
pub fn does_sequence_fold_to(sequence: &str, target_structure: &str) -> Result<bool, EngineError> {
    Vienna::shared().does_sequence_fold_to(sequence, target_structure)
}
