//! # vienna
//!
//! A typed Rust front end for the ViennaRNA secondary-structure executables
//! (`RNAfold`, `RNAcofold`, `RNAinverse`).
//!
//! The folding itself happens inside the external engine. This crate builds the
//! invocations, runs them, and turns the engine's text output into immutable
//! result records.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless result records (`FoldResult`,
//!   `InverseResult`), sequence and structure validation, and the parsers for the
//!   engine's stdout, dot-plot dumps and inverse-design listings.
//!
//! - **[`engine`]: The Invocation Layer.** Configuration, executable discovery
//!   and version detection, argument-vector construction, the process runner
//!   and per-invocation scratch directories.
//!
//! - **[`workflows`]: The Public API.** The [`Vienna`] client and the
//!   operations `fold`, `cofold`, `inverse_fold`, `folded_structure` and
//!   `does_sequence_fold_to`.
//!
//! Output parsing is position based and has been checked against ViennaRNA
//! 2.4 through 2.6. Re-verify the parsers when upgrading the engine.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::{BasePairProb, FoldResult, InverseResult, SeqScore};
pub use crate::engine::config::{EngineConfig, EngineConfigBuilder};
pub use crate::engine::error::EngineError;
pub use crate::workflows::{
    DEFAULT_MAX_SOLUTIONS, Vienna, cofold, does_sequence_fold_to, fold, folded_structure,
    inverse_fold,
};
