//! CLI argument definitions.

use clap::{Args, Parser, ValueEnum};
use pattern_classifier::DEFAULT_ENUM_THRESHOLD;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
pub struct StoreOpts {
    /// Directory holding saved profiles (one JSON file per layout name)
    #[arg(
        long,
        default_value = ".fixedwidth-synth-profiles",
        env = "FIXEDWIDTH_SYNTH_STORE_DIR"
    )]
    pub store_dir: PathBuf,
}

#[derive(Parser, Clone, Debug)]
pub struct ClassifierOpts {
    /// OpenAI-compatible API base URL; the rule-based classifier is used when unset
    #[arg(long, env = "FIXEDWIDTH_SYNTH_CLASSIFIER_URL")]
    pub classifier_url: Option<String>,

    /// Model name sent to the classification service
    #[arg(long, env = "FIXEDWIDTH_SYNTH_CLASSIFIER_MODEL")]
    pub classifier_model: Option<String>,

    /// Bearer token for the classification service
    #[arg(
        long,
        default_value = "",
        env = "FIXEDWIDTH_SYNTH_CLASSIFIER_KEY",
        hide_env_values = true
    )]
    pub classifier_key: String,

    /// Request timeout for the classification service, in seconds
    #[arg(long, default_value = "30")]
    pub classifier_timeout_secs: u64,

    /// Distinct-value threshold below which the rule-based classifier picks ENUM
    #[arg(long, default_value_t = DEFAULT_ENUM_THRESHOLD)]
    pub enum_threshold: u64,
}

/// Arguments for the `layout` command.
#[derive(Args, Clone, Debug)]
pub struct LayoutArgs {
    /// Layout sheet exported as CSV (header row, then name/length rows)
    #[arg(long)]
    pub layout_file: PathBuf,

    /// Field delimiter of the layout CSV
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

/// Arguments for the `profile` command.
#[derive(Args, Clone, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Fixed-width data file to profile
    #[arg(long)]
    pub data_file: PathBuf,

    /// Name to save the profile under (default: layout file stem)
    #[arg(long)]
    pub layout_name: Option<String>,

    #[command(flatten)]
    pub classifier: ClassifierOpts,

    #[command(flatten)]
    pub store: StoreOpts,
}

impl ProfileArgs {
    /// The layout name the profile is saved under.
    pub fn resolved_layout_name(&self) -> Option<String> {
        self.layout_name.clone().or_else(|| {
            self.layout
                .layout_file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
    }
}

/// Output format for generated records.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line, fields in profile order
    #[value(name = "jsonl")]
    Jsonl,
    /// Fixed-width lines using the saved (or supplied) layout
    #[value(name = "fixed-width")]
    FixedWidth,
}

/// Arguments for the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Name of a previously saved profile
    #[arg(long)]
    pub layout_name: String,

    /// Number of records to generate
    #[arg(long)]
    pub volume: u64,

    /// Random seed (overrides the generation config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Index of the first record (for generating disjoint partitions)
    #[arg(long, default_value = "0")]
    pub start_index: u64,

    /// YAML generation config (seed, sequence_widths)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    pub format: OutputFormat,

    /// Layout CSV for fixed-width output when the profile was saved without one
    #[arg(long)]
    pub layout_file: Option<PathBuf>,

    /// Field delimiter of the layout CSV
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreOpts,
}
