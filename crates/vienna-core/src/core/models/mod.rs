//! Immutable result records returned by the workflows.

mod fold;
mod inverse;

pub use fold::{BasePairProb, FoldResult};
pub use inverse::{InverseResult, SeqScore};
