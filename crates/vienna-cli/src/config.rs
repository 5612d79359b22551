//! Resolution of the effective configuration from built-in defaults, an
//! optional TOML file, `--set` overrides and command-line flags, in increasing
//! order of precedence.

mod builder;
mod defaults;
mod file;

pub use builder::build_config;

use vienna::EngineConfig;

/// Fully resolved settings for one CLI run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub num_solutions: usize,
}
