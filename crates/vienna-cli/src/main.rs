mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::Context;
use crate::error::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};
use vienna::Vienna;

fn main() -> ExitCode {
    match run_app() {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("vienna CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let num_solutions = match &cli.command {
        Commands::Inverse(args) => args.num_solutions,
        _ => None,
    };
    let app = config::build_config(&cli.config, num_solutions)?;
    debug!(?app, "Resolved configuration.");

    let ctx = Context {
        vienna: Vienna::new(app.engine.clone()),
        app,
        format: cli.format,
        show_progress: !cli.quiet,
    };

    match cli.command {
        Commands::Fold(args) => {
            info!("Dispatching to 'fold' command.");
            commands::fold::run(args, &ctx)?;
        }
        Commands::Cofold(args) => {
            info!("Dispatching to 'cofold' command.");
            commands::cofold::run(args, &ctx)?;
        }
        Commands::Inverse(args) => {
            info!("Dispatching to 'inverse' command.");
            commands::inverse::run(args, &ctx)?;
        }
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            if !commands::check::run(args, &ctx)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Engine => {
            info!("Dispatching to 'engine' command.");
            commands::engine::run(&ctx)?;
        }
    }

    info!("Command completed successfully.");
    Ok(ExitCode::SUCCESS)
}
