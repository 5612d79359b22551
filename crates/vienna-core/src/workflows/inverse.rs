use super::client::Vienna;
use crate::core::alphabet;
use crate::core::io::inverse_output;
use crate::core::models::InverseResult;
use crate::engine::config::Tool;
use crate::engine::error::EngineError;
use crate::engine::invocation;
use crate::engine::runner::StdinSource;
use tracing::{debug, instrument};

/// Solution count used when the caller does not ask for a specific number.
pub const DEFAULT_MAX_SOLUTIONS: usize = 100;

const INPUT_FILE: &str = "inverse.in";

impl Vienna {
    /// Searches for sequences folding into `target_structure` with `RNAinverse`.
    ///
    /// `constraint` has one IUPAC letter per position: lower-case letters stay
    /// fixed, `N` is free. At most `max_solutions` distinct candidates are
    /// returned; the engine may find fewer.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unbalanced or non-dot-bracket target, a constraint
    /// of the wrong length or alphabet, or `max_solutions == 0`.
    #[instrument(skip(self, constraint), fields(len = target_structure.len()))]
    pub fn inverse_fold(
        &self,
        target_structure: &str,
        constraint: &str,
        max_solutions: usize,
    ) -> Result<InverseResult, EngineError> {
        alphabet::validate_structure(target_structure)?;
        alphabet::validate_constraint(constraint, target_structure)?;
        if max_solutions == 0 {
            return Err(EngineError::InvalidInput(
                "max_solutions must be at least 1".to_string(),
            ));
        }
        let info = self.tool_info(Tool::Inverse)?;
        let args = invocation::inverse_args(self.config(), max_solutions);

        let scratch = self.scratch()?;
        let input = scratch.write_file(
            INPUT_FILE,
            &format!("{}\n{}\n", target_structure, constraint),
        )?;
        let stdout = self.execute(&info, args, StdinSource::File(input), &scratch)?;
        let result = inverse_output::collect_inverse_output(&stdout, max_solutions)?;
        scratch.close();

        debug!(found = result.len(), requested = max_solutions, "Inverse folding finished.");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::testing::*;
    use super::*;
    use crate::engine::runner::CommandOutput;
    use std::sync::Arc;
    use tempfile::tempdir;

    const TARGET: &str = "(((.(((....))).)))";
    const CONSTRAINT: &str = "NNNgNNNNNNNNNNaNNN";

    const INVERSE_STDOUT: &str = "\
Input structure & start string (lower case letters for const positions)
GGCgCCGAAAGGCaGCCA   0
GGCgCCGAAAGGCaGCCA   0
CUAgGCCUUCGGCaUAGA   0
d= 0.1234 some diagnostic line here
ACUgCGCAAAGCGaAGUA   1
UGGgCCCGAAGGGaCCAA   0
GCUgUCCAAAGGAaAGCA   2
AAAgGGGAAACCCaUUUA   0
";

    fn inverse_engine() -> Arc<MockRunner> {
        Arc::new(MockRunner::new(|_| Ok(CommandOutput::success(INVERSE_STDOUT))))
    }

    #[test]
    fn inverse_fold_collects_distinct_candidates_up_to_the_cap() {
        let dir = tempdir().unwrap();
        let runner = inverse_engine();
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner.clone());

        let result = vienna.inverse_fold(TARGET, CONSTRAINT, 5).unwrap();
        assert_eq!(result.len(), 5);
        let sequences: Vec<&str> = result.sequences().collect();
        assert_eq!(
            sequences,
            vec![
                "GGCgCCGAAAGGCaGCCA",
                "CUAgGCCUUCGGCaUAGA",
                "ACUgCGCAAAGCGaAGUA",
                "UGGgCCCGAAGGGaCCAA",
                "GCUgUCCAAAGGAaAGCA",
            ]
        );
        assert_eq!(result.get(4).unwrap().score, 2.0);

        let calls = runner.engine_calls();
        assert_eq!(calls[0].tool, Tool::Inverse);
        assert_eq!(calls[0].args, vec!["-Fmp", "-f", "0.5", "-d2", "-R5"]);
        assert_eq!(
            runner.inputs.lock().unwrap()[0],
            format!("{}\n{}\n", TARGET, CONSTRAINT)
        );
        assert!(leftover_entries(dir.path()).is_empty());
    }

    #[test]
    fn inverse_fold_returns_fewer_when_engine_finds_fewer() {
        let dir = tempdir().unwrap();
        let vienna = Vienna::with_runner(placeholder_config(&dir), inverse_engine());
        let result = vienna.inverse_fold(TARGET, CONSTRAINT, DEFAULT_MAX_SOLUTIONS).unwrap();
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn inverse_fold_validates_arguments_before_invocation() {
        let dir = tempdir().unwrap();
        let runner = inverse_engine();
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner.clone());

        let cases = [
            ("", "", 5),
            ("(((...)", "NNNNNNN", 5),
            ("((..))&..", "NNNNNNNNN", 5),
            (TARGET, "NNNN", 5),
            (TARGET, "NNNgNNNNNNNNNNaNN!", 5),
            (TARGET, CONSTRAINT, 0),
        ];
        for (target, constraint, max) in cases {
            assert!(
                matches!(
                    vienna.inverse_fold(target, constraint, max),
                    Err(EngineError::InvalidInput(_))
                ),
                "accepted {target:?} / {constraint:?} / {max}"
            );
        }
        assert!(runner.engine_calls().is_empty());
    }

    #[test]
    fn non_numeric_score_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| {
            Ok(CommandOutput::success("GGCgCCGAAAGGCaGCCA   zero\n"))
        }));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner);
        assert!(matches!(
            vienna.inverse_fold(TARGET, CONSTRAINT, 5),
            Err(EngineError::Parse(_))
        ));
        assert!(leftover_entries(dir.path()).is_empty());
    }
}
