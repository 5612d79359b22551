use super::AppConfig;
use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use vienna::EngineConfigBuilder;
use vienna::engine::config::Tool;

/// Merges defaults, the config file, `--set` overrides and flags.
///
/// `num_solutions` is the `inverse -n` flag, which only that subcommand has.
pub fn build_config(args: &ConfigArgs, num_solutions: Option<usize>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let engine_file = file_config.engine.unwrap_or_default();
    let inverse_file = file_config.inverse.unwrap_or_default();

    let no_lonely_pairs = if args.lonely_pairs {
        false
    } else {
        engine_file
            .no_lonely_pairs
            .unwrap_or(defaults.no_lonely_pairs)
    };

    let mut builder = EngineConfigBuilder::new()
        .dangles(args.dangles.or(engine_file.dangles).unwrap_or(defaults.dangles))
        .no_lonely_pairs(no_lonely_pairs)
        .inverse_final_cost(
            args.final_cost
                .or(inverse_file.final_cost)
                .unwrap_or(defaults.final_cost),
        );
    if let Some(dir) = args.bin_dir.clone().or(engine_file.bin_dir) {
        builder = builder.bin_dir(dir);
    }
    if let Some(dir) = engine_file.scratch_root {
        builder = builder.scratch_root(dir);
    }
    if let Some(t) = args.temperature.or(engine_file.temperature) {
        builder = builder.temperature(t);
    }
    let tools = engine_file.tools.unwrap_or_default();
    for (tool, path) in [
        (Tool::Fold, tools.fold),
        (Tool::Cofold, tools.cofold),
        (Tool::Inverse, tools.inverse),
    ] {
        if let Some(path) = path {
            builder = builder.tool_path(tool, path);
        }
    }
    let engine = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let num_solutions = num_solutions
        .or(inverse_file.num_solutions)
        .unwrap_or(defaults.num_solutions);
    if num_solutions == 0 {
        return Err(CliError::Config(
            "the number of solutions must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        engine,
        num_solutions,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        if let Some(field) = key.strip_prefix("engine.") {
            let engine = config.engine.get_or_insert_with(Default::default);
            match field {
                "bin-dir" => engine.bin_dir = Some(PathBuf::from(value_str)),
                "scratch-root" => engine.scratch_root = Some(PathBuf::from(value_str)),
                "dangles" => engine.dangles = Some(parse_value(key, value_str, "integer")?),
                "no-lonely-pairs" => {
                    engine.no_lonely_pairs = Some(parse_value(key, value_str, "boolean")?)
                }
                "temperature" => engine.temperature = Some(parse_value(key, value_str, "float")?),
                "tools.fold" | "tools.cofold" | "tools.inverse" => {
                    let tools = engine.tools.get_or_insert_with(Default::default);
                    let slot = match field {
                        "tools.fold" => &mut tools.fold,
                        "tools.cofold" => &mut tools.cofold,
                        _ => &mut tools.inverse,
                    };
                    *slot = Some(PathBuf::from(value_str));
                }
                _ => return Err(unsupported_key(key)),
            }
        } else if let Some(field) = key.strip_prefix("inverse.") {
            let inverse = config.inverse.get_or_insert_with(Default::default);
            match field {
                "num-solutions" => {
                    inverse.num_solutions = Some(parse_value(key, value_str, "integer")?)
                }
                "final-cost" => inverse.final_cost = Some(parse_value(key, value_str, "float")?),
                _ => return Err(unsupported_key(key)),
            }
        } else {
            return Err(unsupported_key(key));
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}
