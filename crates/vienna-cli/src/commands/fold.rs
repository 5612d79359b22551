use super::{Context, finish, partition_outcomes};
use crate::cli::FoldArgs;
use crate::error::{CliError, Result};
use crate::output::{self, FoldRecord};
use crate::utils::input::read_sequences;
use crate::utils::progress::CliProgressHandler;
use tracing::info;
use vienna::core::io::bpp_csv;
use vienna::engine::progress::ProgressReporter;

pub fn run(args: FoldArgs, ctx: &Context) -> Result<()> {
    let mut sequences = args.sequences;
    if let Some(path) = &args.input {
        info!("Reading sequences from {:?}", path);
        sequences.extend(read_sequences(path)?);
    }
    if sequences.is_empty() {
        return Err(CliError::Argument("no sequences to fold".to_string()));
    }
    if args.bpp_csv.is_some() && sequences.len() != 1 {
        return Err(CliError::Argument(
            "--bpp-csv requires exactly one sequence".to_string(),
        ));
    }
    let want_probabilities = args.bpp || args.bpp_csv.is_some();

    let outcomes = if sequences.len() == 1 {
        vec![ctx.vienna.fold(&sequences[0], want_probabilities)]
    } else {
        let progress = CliProgressHandler::new(ctx.show_progress);
        let reporter = ProgressReporter::with_callback(progress.get_callback());
        ctx.vienna
            .fold_batch(sequences.as_slice(), want_probabilities, &reporter)
    };
    let (folded, failed) = partition_outcomes(&sequences, outcomes)?;

    if let (Some(path), Some((_, result))) = (&args.bpp_csv, folded.first()) {
        bpp_csv::write_bpp_to_path(result.bp_probs(), path)?;
        info!(pairs = result.bp_probs().len(), "Wrote base-pair probabilities to {:?}", path);
    }

    let records: Vec<FoldRecord<'_>> = folded
        .iter()
        .map(|(sequence, result)| FoldRecord { sequence, result })
        .collect();
    output::emit(ctx.format, &records, |out| {
        for record in &records {
            output::write_fold_text(out, record, args.bpp)?;
        }
        Ok(())
    })?;

    finish(failed, sequences.len())
}
