// src/app.rs
use crate::config::Config;
use crate::presentation::{self, Report};
use anyhow::{Context, Result};
use std::io::Write;
use text_stats_domain::{analyze, get_word_frequencies};
use text_stats_ports::TextSource;

/// Analyze `text` according to `config`.
pub fn build_report(text: &str, config: &Config) -> Report {
    let stats = analyze(text);
    let frequencies = config
        .show_frequencies
        .then(|| get_word_frequencies(text, config.top_n));
    Report::new(stats, frequencies)
}

/// Read one input, analyze it and render the report without printing it.
///
/// # Errors
/// Returns an error when the source cannot be read or the report cannot be rendered.
pub fn execute<S>(source: &mut S, config: &Config) -> Result<String>
where
    S: TextSource + ?Sized,
{
    let origin = source.origin();
    log::info!("analyzing {origin}");

    let text = source
        .read_text()
        .with_context(|| format!("failed to read {origin}"))?;

    let report = build_report(&text, config);
    if report.stats.is_empty() {
        log::warn!("{origin} is empty");
    }
    log::debug!(
        "{origin}: {} chars, {} words, {} lines",
        report.stats.characters,
        report.stats.words,
        report.stats.lines
    );

    presentation::render(&report, config.format).context("failed to render report")
}

/// Entry point used by the binary.
///
/// # Errors
/// Returns an error when reading, rendering or writing to stdout fails.
pub fn run(config: &Config) -> Result<()> {
    let mut source = config.input.open();
    let rendered = execute(source.as_mut(), config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report")?;
    Ok(())
}
