//! Generate command handler.

use super::layout::read_layout;
use crate::{GenerateArgs, LayoutArgs, OutputFormat};
use anyhow::{anyhow, Context, Result};
use fixedwidth_source::encode_record;
use profile_store::ProfileStore;
use std::io::Write;
use synth_core::{Layout, SyntheticRecord};
use synth_generator::{GenerationConfig, SyntheticGenerator};

/// Write records in the requested format, one per line.
pub fn write_records<I>(
    records: I,
    format: OutputFormat,
    layout: Option<&Layout>,
    out: &mut dyn Write,
) -> Result<u64>
where
    I: IntoIterator<Item = SyntheticRecord>,
{
    let mut written = 0u64;
    for record in records {
        match format {
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
            OutputFormat::FixedWidth => {
                let layout =
                    layout.ok_or_else(|| anyhow!("Fixed-width output requires a layout"))?;
                writeln!(out, "{}", encode_record(&record, layout))?;
            }
        }
        written += 1;
    }
    Ok(written)
}

/// Run the generate command: load a saved profile and write `volume` records.
pub fn run_generate(args: &GenerateArgs, store: &dyn ProfileStore, out: &mut dyn Write) -> Result<u64> {
    let file = store
        .load(&args.layout_name)?
        .ok_or_else(|| anyhow!("No profile saved for layout '{}'", args.layout_name))?;

    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)
            .with_context(|| format!("Failed to load generation config {}", path.display()))?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let layout = match (&args.layout_file, args.format) {
        (Some(layout_file), _) => Some(read_layout(&LayoutArgs {
            layout_file: layout_file.clone(),
            delimiter: args.delimiter,
        })?),
        (None, OutputFormat::FixedWidth) => Some(file.layout.clone().ok_or_else(|| {
            anyhow!(
                "Profile '{}' was saved without a layout; pass --layout-file for fixed-width output",
                args.layout_name
            )
        })?),
        (None, OutputFormat::Jsonl) => None,
    };

    tracing::info!(
        volume = args.volume,
        seed = config.seed,
        start_index = args.start_index,
        "Generating records for '{}'",
        args.layout_name
    );

    let mut generator =
        SyntheticGenerator::from_config(&file.profile, &config).with_start_index(args.start_index);
    let written = write_records(
        generator.records(args.volume),
        args.format,
        layout.as_ref(),
        out,
    )?;
    out.flush()?;

    tracing::info!("Generated {written} records");
    Ok(written)
}
