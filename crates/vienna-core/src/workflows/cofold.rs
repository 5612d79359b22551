use super::client::Vienna;
use crate::core::alphabet::{self, STRAND_SEPARATOR};
use crate::core::io::fold_output;
use crate::core::models::FoldResult;
use crate::engine::config::Tool;
use crate::engine::error::EngineError;
use crate::engine::invocation;
use crate::engine::runner::StdinSource;
use tracing::instrument;

impl Vienna {
    /// Folds two strands joined by `&` with `RNAcofold`.
    ///
    /// The returned structure carries `&` at the length of the first strand.
    /// Base-pair probabilities are not extracted for complexes, so
    /// `bp_probs` is always empty. `ensemble_diversity` carries the last
    /// number the engine prints, which is not a diversity for complexes.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless the input holds exactly one `&` between two
    /// non-empty nucleotide strands; otherwise as [`Vienna::fold`].
    #[instrument(skip(self, sequence_pair), fields(len = sequence_pair.len()))]
    pub fn cofold(&self, sequence_pair: &str) -> Result<FoldResult, EngineError> {
        let (first, second) = alphabet::split_complex(sequence_pair)?;
        let info = self.tool_info(Tool::Cofold)?;
        let args = invocation::cofold_args(self.config());

        let scratch = self.scratch()?;
        let stdout = self.execute(
            &info,
            args,
            StdinSource::Text(format!("{}{}{}\n", first, STRAND_SEPARATOR, second)),
            &scratch,
        )?;
        let parsed = fold_output::parse_cofold_output(
            &stdout,
            first.chars().count(),
            second.chars().count(),
        )?;
        scratch.close();

        Ok(FoldResult::new(
            parsed.structure,
            parsed.mfe,
            parsed.ensemble_diversity,
            Vec::new(),
        )?)
    }
}
