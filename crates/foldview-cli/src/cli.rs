use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Elena Marchetti",
    version,
    about = "Foldview CLI - A terminal dashboard for protein-design pipeline jobs: phase progress boards, color-coded sequence views, and request validation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Follow a job's status payload and render the four-phase progress board.
    Watch(WatchArgs),
    /// Render a designed amino-acid sequence, color-coded by chemical class.
    Sequence(SequenceArgs),
    /// Validate a design-job request before submitting it to the pipeline.
    Validate(ValidateArgs),
}

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to the status JSON file maintained by the pipeline service.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub status: PathBuf,

    /// Poll interval in milliseconds.
    #[arg(long, default_value_t = 2000, value_name = "MS")]
    pub interval_ms: u64,

    /// Render the current status once and exit instead of following the job.
    #[arg(long)]
    pub once: bool,
}

/// Arguments for the `sequence` subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    #[command(flatten)]
    pub input: SequenceInput,

    /// Print the chemical-class legend below the sequence.
    #[arg(long)]
    pub legend: bool,

    /// Disable coloring, e.g. when piping the output into a file.
    #[arg(long)]
    pub plain: bool,
}

/// Exactly one source for the sequence to render.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SequenceInput {
    /// Render this literal one-letter sequence.
    #[arg(short = 'S', long, value_name = "SEQ")]
    pub sequence: Option<String>,

    /// Render every record of this FASTA file.
    #[arg(short, long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a request file in TOML format; omitted fields use the
    /// pipeline defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Field Overrides ---
    /// Override the minimum backbone length.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<u32>,

    /// Override the maximum backbone length.
    #[arg(long, value_name = "INT")]
    pub max_length: Option<u32>,

    /// Override the number of backbone samples to generate.
    #[arg(long, value_name = "INT")]
    pub num_samples: Option<u32>,

    /// Override the generator batch size.
    #[arg(long, value_name = "INT")]
    pub batch_size: Option<u32>,

    /// Override the backbone-generation device ('cpu' or 'cuda:<index>').
    #[arg(short, long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Override the number of sequences designed per backbone.
    #[arg(long, value_name = "INT")]
    pub mpnn_num_sequences: Option<u32>,

    /// Override the sequence-design sampling temperature.
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub mpnn_temperature: Option<f64>,

    /// Override the GPU indices used for structure prediction.
    #[arg(short, long, value_name = "IDX", value_delimiter = ',', num_args(1..))]
    pub gpus: Option<Vec<u32>>,
}
