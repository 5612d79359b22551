use super::{Context, finish, partition_outcomes};
use crate::cli::CofoldArgs;
use crate::error::Result;
use crate::output::{self, FoldRecord};

pub fn run(args: CofoldArgs, ctx: &Context) -> Result<()> {
    let outcomes = args
        .pairs
        .iter()
        .map(|pair| ctx.vienna.cofold(pair))
        .collect();
    let (folded, failed) = partition_outcomes(&args.pairs, outcomes)?;

    let records: Vec<FoldRecord<'_>> = folded
        .iter()
        .map(|(sequence, result)| FoldRecord { sequence, result })
        .collect();
    output::emit(ctx.format, &records, |out| {
        for record in &records {
            output::write_fold_text(out, record, false)?;
        }
        Ok(())
    })?;

    finish(failed, args.pairs.len())
}
