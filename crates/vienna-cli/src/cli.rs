use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Joe Yesselman",
    version,
    about = "vienna - fold, cofold and design RNA sequences with the ViennaRNA executables.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Engine settings shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S engine.dangles=0
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Directory searched for the engine executables before PATH.
    #[arg(long, global = true, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Dangling-end model (0-3).
    #[arg(short = 'd', long, global = true, value_name = "INT")]
    pub dangles: Option<u8>,

    /// Folding temperature in degrees Celsius.
    #[arg(short = 'T', long, global = true, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Allow structures with isolated base pairs (drops --noLP).
    #[arg(long, global = true)]
    pub lonely_pairs: bool,

    /// Final cost threshold for inverse folding.
    #[arg(long, global = true, value_name = "FLOAT")]
    pub final_cost: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the MFE structure of one or more single-stranded sequences.
    Fold(FoldArgs),
    /// Predict the joint structure of two strands given as `SEQ1&SEQ2`.
    Cofold(CofoldArgs),
    /// Design sequences that fold into a target structure.
    Inverse(InverseArgs),
    /// Check whether a sequence folds into a given structure (exit code 1 if not).
    Check(CheckArgs),
    /// Show the engine executables that were found and their versions.
    Engine,
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug, Default)]
pub struct FoldArgs {
    /// Sequences to fold.
    #[arg(value_name = "SEQ", required_unless_present = "input")]
    pub sequences: Vec<String>,

    /// Read additional sequences from a file, one per line. FASTA headers and
    /// blank lines are skipped.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Compute and print base-pair probabilities.
    #[arg(long)]
    pub bpp: bool,

    /// Write base-pair probabilities of a single sequence to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub bpp_csv: Option<PathBuf>,
}

/// Arguments for the `cofold` subcommand.
#[derive(Args, Debug)]
pub struct CofoldArgs {
    /// Strand pairs joined by '&', e.g. GGGG&AAACCCC.
    #[arg(value_name = "PAIR", required = true)]
    pub pairs: Vec<String>,
}

/// Arguments for the `inverse` subcommand.
#[derive(Args, Debug)]
pub struct InverseArgs {
    /// Target structure in dot-bracket notation.
    #[arg(value_name = "STRUCTURE")]
    pub structure: String,

    /// Sequence constraint with one IUPAC letter per position; lower case is kept fixed.
    #[arg(value_name = "CONSTRAINT")]
    pub constraint: String,

    /// Maximum number of designs to return.
    #[arg(short, long, value_name = "INT")]
    pub num_solutions: Option<usize>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(value_name = "SEQ")]
    pub sequence: String,

    #[arg(value_name = "STRUCTURE")]
    pub structure: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "vienna", "fold", "GGGGAAAACCCC", "-d", "0", "--format", "json", "-S",
            "inverse.num-solutions=3",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.dangles, Some(0));
        assert_eq!(cli.config.set_values, vec!["inverse.num-solutions=3"]);
        match cli.command {
            Commands::Fold(args) => assert_eq!(args.sequences, vec!["GGGGAAAACCCC"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn fold_requires_a_sequence_or_an_input_file() {
        assert!(Cli::try_parse_from(["vienna", "fold"]).is_err());
        assert!(Cli::try_parse_from(["vienna", "fold", "--input", "seqs.txt"]).is_ok());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vienna", "-q", "-v", "engine"]).is_err());
    }
}
