//! Argument vectors for each engine operation.
//!
//! Flags follow the conventions the parsers in [`crate::core::io`] expect:
//! `-p` so the ensemble statistic is printed, `--noPS` so no structure drawing
//! is written, and `--noDP` only when the dot plot is unwanted and the engine
//! is new enough to know the flag.

use super::config::EngineConfig;
use super::discovery::EngineVersion;

fn common_folding_args(config: &EngineConfig) -> Vec<String> {
    let mut args = vec!["-p".to_string()];
    if config.no_lonely_pairs {
        args.push("--noLP".to_string());
    }
    args.push("--noPS".to_string());
    args.push(format!("-d{}", config.dangles));
    if let Some(t) = config.temperature {
        args.push("-T".to_string());
        args.push(t.to_string());
    }
    args
}

/// Arguments for `RNAfold`. Engines of unknown version never receive `--noDP`;
/// their dot plot is written and discarded with the scratch directory.
pub fn fold_args(
    config: &EngineConfig,
    version: Option<EngineVersion>,
    want_probabilities: bool,
) -> Vec<String> {
    let mut args = common_folding_args(config);
    if !want_probabilities && version.is_some_and(EngineVersion::supports_no_dot_plot) {
        args.insert(1, "--noDP".to_string());
    }
    args
}

/// Arguments for `RNAcofold`.
pub fn cofold_args(config: &EngineConfig) -> Vec<String> {
    common_folding_args(config)
}

/// Arguments for `RNAinverse`, repeating the search `max_solutions` times.
pub fn inverse_args(config: &EngineConfig, max_solutions: usize) -> Vec<String> {
    let mut args = vec![
        "-Fmp".to_string(),
        "-f".to_string(),
        config.inverse_final_cost.to_string(),
        format!("-d{}", config.dangles),
        format!("-R{}", max_solutions),
    ];
    if let Some(t) = config.temperature {
        args.push("-T".to_string());
        args.push(t.to_string());
    }
    args
}
