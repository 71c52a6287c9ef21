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
    author,
    version,
    about = "protfeat CLI - Compute composition, charge, hydropathy, CTD, motif, isoelectric point and embedding features for protein sequences.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the feature matrix for every sequence of a labelled CSV dataset.
    Extract(ExtractArgs),
    /// Print the hand-crafted descriptors of a single sequence.
    Describe(DescribeArgs),
    /// List the built-in motif patterns.
    Motifs,
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    // --- Core Arguments ---
    /// Path to the input dataset (CSV with Protein_ID, Sequence and Label columns).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output feature matrix (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Descriptor Overrides ---
    /// Override the pH used for the net charge descriptor.
    #[arg(long, value_name = "FLOAT")]
    pub ph: Option<f64>,

    /// Replace the motif list. Can be used multiple times. Example: -m KR -m "K[RK]K"
    #[arg(short = 'm', long = "motif", value_name = "PATTERN")]
    pub motifs: Vec<String>,

    // --- Embedding Overrides ---
    /// Override `embeddings.enabled` from the config file.
    #[command(flatten)]
    pub embeddings: EmbeddingToggle,

    /// Override the embedding model repository on the Hugging Face Hub.
    #[arg(long, value_name = "MODEL_ID")]
    pub model: Option<String>,

    /// Run the embedding model on the CPU even when an accelerator is available.
    #[arg(long)]
    pub cpu: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S charge.ph=7.4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive boolean flags for the embedding block.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct EmbeddingToggle {
    /// Append the embedding block to every row.
    #[arg(long = "embeddings")]
    pub with_embeddings: bool,
    /// Skip the embedding block, even if the config file enables it.
    #[arg(long)]
    pub no_embeddings: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// The amino acid sequence in one-letter code.
    #[arg(required = true)]
    pub sequence: String,

    /// The pH used for the net charge descriptor.
    #[arg(long, value_name = "FLOAT")]
    pub ph: Option<f64>,

    /// Replace the motif list. Can be used multiple times.
    #[arg(short = 'm', long = "motif", value_name = "PATTERN")]
    pub motifs: Vec<String>,
}
