//! Layout command handler.

use crate::LayoutArgs;
use anyhow::{bail, Context, Result};
use fixedwidth_source::{load_layout, CsvLayoutSource};
use std::io::Write;
use synth_core::Layout;

/// Decode the layout named by `args`.
///
/// A missing layout file is fatal; malformed rows are skipped.
pub fn read_layout(args: &LayoutArgs) -> Result<Layout> {
    if !args.delimiter.is_ascii() {
        bail!("Layout delimiter must be a single ASCII character");
    }

    let source = CsvLayoutSource::new(args.layout_file.clone()).with_delimiter(args.delimiter as u8);
    let layout = load_layout(&source)
        .with_context(|| format!("Failed to load layout from {}", args.layout_file.display()))?;
    tracing::info!(
        fields = layout.len(),
        record_length = layout.record_length(),
        "Loaded layout from {}",
        args.layout_file.display()
    );
    Ok(layout)
}

/// Run the layout command: print each field with its width and offset.
pub fn run_layout(args: &LayoutArgs, out: &mut dyn Write) -> Result<Layout> {
    let layout = read_layout(args)?;

    writeln!(out, "{:<32} {:>6} {:>8}", "FIELD", "WIDTH", "OFFSET")?;
    for (field, start) in layout.spans() {
        writeln!(out, "{:<32} {:>6} {:>8}", field.name, field.width, start)?;
    }
    writeln!(
        out,
        "{} fields, record length {}",
        layout.len(),
        layout.record_length()
    )?;

    Ok(layout)
}
