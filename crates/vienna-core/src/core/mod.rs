//! # Core Module
//!
//! Stateless building blocks shared by the invocation layer and the public
//! workflows.
//!
//! - **Result records** ([`models`]) - `FoldResult`, `BasePairProb`, `InverseResult`
//! - **Engine output parsing** ([`io`]) - stdout of the folding tools, dot-plot
//!   dumps, inverse-design listings and CSV export of pair probabilities
//! - **Input validation** ([`alphabet`]) - nucleotide and dot-bracket alphabets

pub mod alphabet;
pub mod io;
pub mod models;
