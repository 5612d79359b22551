//! # Engine Module
//!
//! Everything needed to drive the external ViennaRNA executables.
//!
//! - **Configuration** ([`config`]) - tool locations and folding parameters
//! - **Discovery** ([`discovery`]) - locating executables and detecting the
//!   engine version
//! - **Invocation** ([`invocation`]) - the argument vectors for each operation
//! - **Process execution** ([`runner`]) - the `CommandRunner` seam and the real
//!   subprocess implementation
//! - **Scratch space** ([`scratch`]) - per-invocation working directories for
//!   the engine's auxiliary files
//! - **Progress reporting** ([`progress`]) - callbacks for batch operations
//!
//! Sequences are passed to the engine over stdin and arguments are passed as a
//! vector, so no shell ever interprets caller data.

pub mod config;
pub mod discovery;
pub mod error;
pub mod invocation;
pub mod progress;
pub mod runner;
pub mod scratch;
