use super::Context;
use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output;
use serde::Serialize;
use std::io::Write;
use vienna::EngineError;
use vienna::core::alphabet;

#[derive(Serialize)]
struct CheckRecord<'a> {
    sequence: &'a str,
    target: &'a str,
    folded: &'a str,
    matches: bool,
}

/// Returns whether the sequence folds into the target structure.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<bool> {
    alphabet::validate_structure(&args.structure).map_err(EngineError::from)?;
    let folded = ctx.vienna.folded_structure(&args.sequence)?;
    let record = CheckRecord {
        sequence: &args.sequence,
        target: &args.structure,
        folded: &folded,
        matches: folded == args.structure,
    };

    output::emit(ctx.format, &record, |out| {
        writeln!(out, "{}", record.sequence)?;
        writeln!(out, "{} (folded)", record.folded)?;
        writeln!(out, "{} (target)", record.target)?;
        writeln!(out, "{}", if record.matches { "match" } else { "mismatch" })?;
        Ok(())
    })?;
    Ok(record.matches)
}
