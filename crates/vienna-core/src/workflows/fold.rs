use super::client::Vienna;
use crate::core::alphabet;
use crate::core::io::{dot_plot, fold_output};
use crate::core::models::FoldResult;
use crate::engine::config::Tool;
use crate::engine::error::EngineError;
use crate::engine::invocation;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::runner::StdinSource;
use tracing::{info, instrument};

impl Vienna {
    /// Folds a single strand with `RNAfold`.
    ///
    /// With `want_probabilities` the base-pair probabilities are read from the
    /// engine's dot plot; otherwise `bp_probs` is empty.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty or non-nucleotide sequence, `EngineNotFound`,
    /// `EngineExecutionFailed`, or `Parse` when the structure, energy or
    /// requested dot plot cannot be read.
    #[instrument(skip(self, sequence), fields(len = sequence.len()))]
    pub fn fold(
        &self,
        sequence: &str,
        want_probabilities: bool,
    ) -> Result<FoldResult, EngineError> {
        alphabet::validate_sequence(sequence)?;
        let info = self.tool_info(Tool::Fold)?;
        let args = invocation::fold_args(self.config(), info.version, want_probabilities);

        let scratch = self.scratch()?;
        let stdout = self.execute(
            &info,
            args,
            StdinSource::Text(format!("{}\n", sequence)),
            &scratch,
        )?;
        let parsed = fold_output::parse_fold_output(&stdout, sequence.chars().count())?;
        let bp_probs = if want_probabilities {
            dot_plot::extract_from_file(&scratch.join(dot_plot::DOT_PLOT_FILE))?
        } else {
            Vec::new()
        };
        scratch.close();

        Ok(FoldResult::new(
            parsed.structure,
            parsed.mfe,
            parsed.ensemble_diversity,
            bp_probs,
        )?)
    }

    /// MFE structure of `sequence` in dot-bracket notation.
    pub fn folded_structure(&self, sequence: &str) -> Result<String, EngineError> {
        let (dot_bracket, ..) = self.fold(sequence, false)?.into_parts();
        Ok(dot_bracket)
    }

    /// Whether `sequence` folds into `target_structure`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `target_structure` is not balanced dot-bracket
    /// notation, plus every error of [`Vienna::fold`].
    pub fn does_sequence_fold_to(
        &self,
        sequence: &str,
        target_structure: &str,
    ) -> Result<bool, EngineError> {
        alphabet::validate_structure(target_structure)?;
        Ok(self.folded_structure(sequence)? == target_structure)
    }

    /// Folds each sequence in turn, one engine process per sequence.
    ///
    /// Failures are returned per sequence and do not stop the batch.
    #[instrument(skip_all, name = "fold_batch", fields(count = sequences.len()))]
    pub fn fold_batch<S: AsRef<str>>(
        &self,
        sequences: &[S],
        want_probabilities: bool,
        reporter: &ProgressReporter,
    ) -> Vec<Result<FoldResult, EngineError>> {
        reporter.report(Progress::BatchStart {
            total: sequences.len() as u64,
        });
        let results: Vec<_> = sequences
            .iter()
            .enumerate()
            .map(|(index, seq)| {
                let result = self.fold(seq.as_ref(), want_probabilities);
                reporter.report_outcome(index, &result);
                result
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        reporter.report(Progress::BatchFinish { failed });
        info!(total = results.len(), failed, "Batch folding finished.");
        results
    }
}
