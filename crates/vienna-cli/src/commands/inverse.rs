use super::Context;
use crate::cli::InverseArgs;
use crate::error::Result;
use crate::output;
use tracing::{info, warn};

pub fn run(args: InverseArgs, ctx: &Context) -> Result<()> {
    let requested = ctx.app.num_solutions;
    info!(requested, "Designing sequences for {}", args.structure);

    let designs = ctx
        .vienna
        .inverse_fold(&args.structure, &args.constraint, requested)?;
    if designs.len() < requested {
        warn!(found = designs.len(), requested, "Engine returned fewer designs than requested.");
    }

    output::emit(ctx.format, &designs, |out| output::write_inverse_text(out, &designs))
}
