//! Profile command handler.

use super::layout::read_layout;
use crate::{ClassifierOpts, ProfileArgs};
use anyhow::{anyhow, Context, Result};
use column_profiler::profile_records;
use fixedwidth_source::decode_records;
use pattern_classifier::{
    annotate_profiles, ClassifierEndpoint, LlmClassifier, PatternClassifier, RuleBasedClassifier,
};
use profile_store::{ProfileFile, ProfileStore};
use std::io::Write;
use std::time::Duration;
use synth_core::{Layout, ProfileSet};
use tracing::info;

/// Decode, profile and classify `content` against `layout`.
pub fn learn_profile(
    layout: &Layout,
    content: &str,
    classifier: &dyn PatternClassifier,
) -> ProfileSet {
    let records = decode_records(content, layout);
    info!(records = records.len(), "Decoded records");

    let profiles = profile_records(&records);
    info!(columns = profiles.len(), "Profiled columns");

    annotate_profiles(&profiles, classifier)
}

/// Pick the classifier for these options.
///
/// Without a service URL the rule-based classifier is used.
pub fn build_classifier(opts: &ClassifierOpts) -> Result<Box<dyn PatternClassifier>> {
    let Some(api_url) = &opts.classifier_url else {
        info!("No classification service configured, using rule-based classifier");
        return Ok(Box::new(
            RuleBasedClassifier::new().with_enum_threshold(opts.enum_threshold),
        ));
    };

    let model_name = opts
        .classifier_model
        .clone()
        .ok_or_else(|| anyhow!("--classifier-model is required with --classifier-url"))?;

    info!(model = %model_name, "Using classification service at {api_url}");
    let classifier = LlmClassifier::with_timeout(
        ClassifierEndpoint {
            api_url: api_url.clone(),
            api_key: opts.classifier_key.clone(),
            model_name,
        },
        Duration::from_secs(opts.classifier_timeout_secs),
    )?;
    Ok(Box::new(classifier))
}

/// Run the profile command: learn a profile and save it under the layout name.
pub fn run_profile(
    args: &ProfileArgs,
    store: &dyn ProfileStore,
    out: &mut dyn Write,
) -> Result<ProfileSet> {
    let layout_name = args
        .resolved_layout_name()
        .ok_or_else(|| anyhow!("--layout-name is required when the layout file has no name"))?;

    let layout = read_layout(&args.layout)?;
    let content = std::fs::read_to_string(&args.data_file)
        .with_context(|| format!("Failed to read data file {}", args.data_file.display()))?;

    let classifier = build_classifier(&args.classifier)?;
    let profiles = learn_profile(&layout, &content, classifier.as_ref());

    store
        .save(&ProfileFile::new(layout_name.as_str(), profiles.clone()).with_layout(layout))
        .with_context(|| format!("Failed to save profile '{layout_name}'"))?;

    writeln!(
        out,
        "{:<32} {:<18} {:>8} {:>8} {:>9}",
        "COLUMN", "PATTERN", "UNIQUE", "TOTAL", "LENGTH"
    )?;
    for column in &profiles {
        let pattern = column
            .pattern()
            .map(|p| p.tag())
            .unwrap_or("-");
        writeln!(
            out,
            "{:<32} {:<18} {:>8} {:>8} {:>9}",
            column.column_name,
            pattern,
            column.profile.unique_count,
            column.profile.total_count,
            format!("{}-{}", column.profile.min_length, column.profile.max_length)
        )?;
    }
    writeln!(out, "Saved profile '{layout_name}'")?;

    Ok(profiles)
}
