use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "qascore",
    version,
    about = "Token-level F1 scoring for question-answering predictions"
)]
pub struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a dataset of gold/predicted answers
    Run(RunArgs),
    /// Score a single gold/predicted pair
    Pair(PairArgs),
    /// Show how an answer is normalized and tokenized
    Normalize(NormalizeArgs),
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Eval config (YAML or JSON). Optional when a dataset is given on the command line.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSONL file with one {"gold", "predicted"} object per line
    #[arg(long, conflicts_with_all = ["gold", "predicted"])]
    pub dataset: Option<PathBuf>,

    /// Gold answers (JSON array or JSONL of values)
    #[arg(long, requires = "predicted")]
    pub gold: Option<PathBuf>,

    /// Predicted answers, aligned with --gold
    #[arg(long, requires = "gold")]
    pub predicted: Option<PathBuf>,

    /// Fail (exit 1) when the mean F1 is below this value
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Write the JSON report here
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PairArgs {
    #[arg(long)]
    pub gold: String,

    #[arg(long)]
    pub predicted: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct NormalizeArgs {
    pub text: String,
}
