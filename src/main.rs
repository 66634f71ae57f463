//! Command-line interface for fixedwidth-synth
//!
//! # Usage Examples
//!
//! ## Inspect a layout
//! ```bash
//! fixedwidth-synth layout --layout-file orders_layout.csv
//! ```
//!
//! ## Learn a profile
//! ```bash
//! # Rule-based classification
//! fixedwidth-synth profile \
//!   --layout-file orders_layout.csv \
//!   --data-file orders.txt \
//!   --layout-name orders
//!
//! # Classification through an OpenAI-compatible service
//! FIXEDWIDTH_SYNTH_CLASSIFIER_URL=http://localhost:11434/v1 \
//! FIXEDWIDTH_SYNTH_CLASSIFIER_MODEL=llama3.1 \
//! fixedwidth-synth profile --layout-file orders_layout.csv --data-file orders.txt
//! ```
//!
//! ## Generate records
//! ```bash
//! # JSON Lines to stdout
//! fixedwidth-synth generate --layout-name orders --volume 1000 --seed 7
//!
//! # Fixed-width lines, second partition of 1000
//! fixedwidth-synth generate --layout-name orders --volume 1000 \
//!   --start-index 1000 --format fixed-width -o orders_part2.txt
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixedwidth_synth::pipeline::{run_generate, run_layout, run_profile};
use fixedwidth_synth::{GenerateArgs, LayoutArgs, ProfileArgs};
use profile_store::FilesystemStore;
use std::io::{BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixedwidth-synth")]
#[command(about = "Learn column patterns from fixed-width files and generate synthetic records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a layout sheet and print its fields
    Layout(LayoutArgs),

    /// Profile a fixed-width data file and save the annotated profile
    Profile(ProfileArgs),

    /// Generate synthetic records from a saved profile
    Generate(GenerateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match cli.command {
        Commands::Layout(args) => {
            run_layout(&args, &mut stdout.lock())?;
        }
        Commands::Profile(args) => {
            let store = FilesystemStore::new(args.store.store_dir.clone());
            run_profile(&args, &store, &mut stdout.lock())?;
        }
        Commands::Generate(args) => {
            let store = FilesystemStore::new(args.store.store_dir.clone());
            match &args.output {
                Some(path) => {
                    let file = std::fs::File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    run_generate(&args, &store, &mut writer)?;
                    writer.flush()?;
                }
                None => {
                    let mut writer = BufWriter::new(stdout.lock());
                    run_generate(&args, &store, &mut writer)?;
                    writer.flush()?;
                }
            }
        }
    }

    Ok(())
}
