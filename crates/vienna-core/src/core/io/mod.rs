//! Parsers for the folding engine's output and helpers for exporting results.
//!
//! Each parser works on text that has already been captured, so the engine is
//! never needed to exercise them. Formats are those written by ViennaRNA 2.x:
//!
//! - [`fold_output`] - stdout of `RNAfold -p` and `RNAcofold -p`
//! - [`dot_plot`] - the `dot.ps` PostScript dump holding pair probabilities
//! - [`inverse_output`] - candidate listings printed by `RNAinverse`
//! - [`bpp_csv`] - CSV export and import of pair probabilities

pub mod bpp_csv;
pub mod dot_plot;
mod error;
pub mod fold_output;
pub mod inverse_output;

pub use error::ParseError;
