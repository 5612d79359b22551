pub mod check;
pub mod cofold;
pub mod engine;
pub mod fold;
pub mod inverse;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use tracing::error;
use vienna::{EngineError, Vienna};

/// State shared by every subcommand.
pub struct Context {
    pub vienna: Vienna,
    pub app: AppConfig,
    pub format: OutputFormat,
    pub show_progress: bool,
}

/// Splits per-input outcomes into successes and a failure count, reporting
/// each failure. A lone input's error is returned as is.
fn partition_outcomes<'a, T>(
    inputs: &'a [String],
    mut outcomes: Vec<std::result::Result<T, EngineError>>,
) -> Result<(Vec<(&'a str, T)>, usize)> {
    if inputs.len() == 1 && outcomes.first().is_some_and(|o| o.is_err()) {
        if let Some(Err(e)) = outcomes.pop() {
            return Err(e.into());
        }
    }
    let mut successes = Vec::with_capacity(inputs.len());
    let mut failed = 0;
    for (input, outcome) in inputs.iter().zip(outcomes) {
        match outcome {
            Ok(value) => successes.push((input.as_str(), value)),
            Err(e) => {
                failed += 1;
                error!(input = %input, error = %e, "Input failed.");
                eprintln!("{}: {}", input, e);
            }
        }
    }
    Ok((successes, failed))
}

fn finish(failed: usize, total: usize) -> Result<()> {
    if failed > 0 {
        return Err(CliError::PartialFailure { failed, total });
    }
    Ok(())
}
