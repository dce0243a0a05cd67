// src/presentation.rs
use crate::options::OutputFormat;
use serde::Serialize;
use std::fmt::Write;
use text_stats_domain::{FrequencyList, TextStats};
use text_stats_shared_kernel::{PresentationResult, Result};

/// Column where values start in the text report.
const TEXT_VALUE_COLUMN: usize = 16;

/// Everything the reporter prints for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub stats: TextStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<FrequencyList>,
}

impl Report {
    pub const fn new(stats: TextStats, frequencies: Option<FrequencyList>) -> Self {
        Self { stats, frequencies }
    }

    /// Ranked words to print; `None` when the block should be omitted.
    fn ranked_words(&self) -> Option<&FrequencyList> {
        self.frequencies.as_ref().filter(|list| !list.is_empty())
    }
}

/// Render `report` completely into a string.
///
/// Nothing is written anywhere, so a rendering failure can never leave a
/// half-printed report behind.
///
/// # Errors
/// Returns an error when structured serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(report)?,
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
        OutputFormat::Md => render_markdown(report)?,
    };
    Ok(rendered)
}

fn stat_rows(stats: &TextStats) -> [(&'static str, usize); 6] {
    [
        ("文字数", stats.characters.value()),
        ("文字数(空白除く)", stats.characters_no_spaces.value()),
        ("単語数", stats.words.value()),
        ("行数", stats.lines.value()),
        ("文数", stats.sentences.value()),
        ("段落数", stats.paragraphs.value()),
    ]
}

/// Terminal column width: ASCII is narrow, everything in the labels else is wide.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn render_text(report: &Report) -> PresentationResult<String> {
    let mut out = String::new();
    writeln!(out, "=== テキスト統計 ===")?;
    for (label, value) in stat_rows(&report.stats) {
        let head = format!("{label}:");
        let pad = TEXT_VALUE_COLUMN.saturating_sub(display_width(&head)).max(1);
        writeln!(out, "{head}{:pad$}{value}", "")?;
    }

    if let Some(words) = report.ranked_words() {
        writeln!(out)?;
        writeln!(out, "=== 単語出現頻度 ===")?;
        for entry in words {
            writeln!(out, "  {}: {}", entry.word, entry.count)?;
        }
    }

    Ok(out)
}

fn render_markdown(report: &Report) -> PresentationResult<String> {
    let mut out = String::new();
    writeln!(out, "### テキスト統計")?;
    writeln!(out)?;
    writeln!(out, "| 項目 | 値 |")?;
    writeln!(out, "|:---|---:|")?;
    for (label, value) in stat_rows(&report.stats) {
        writeln!(out, "| {label} | {value} |")?;
    }

    if let Some(words) = report.ranked_words() {
        writeln!(out)?;
        writeln!(out, "### 単語出現頻度")?;
        writeln!(out)?;
        writeln!(out, "| 順位 | 単語 | 回数 |")?;
        writeln!(out, "|---:|:---|---:|")?;
        for (rank, entry) in words.iter().enumerate() {
            writeln!(out, "| {} | {} | {} |", rank + 1, entry.word, entry.count)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_stats_domain::FrequencyEntry;
    use text_stats_shared_kernel::{CharCount, LineCount, ParagraphCount, SentenceCount, WordCount};

    fn stats(characters: usize, no_spaces: usize, words: usize, lines: usize, sentences: usize) -> TextStats {
        TextStats {
            characters: CharCount::new(characters),
            characters_no_spaces: CharCount::new(no_spaces),
            words: WordCount::new(words),
            lines: LineCount::new(lines),
            sentences: SentenceCount::new(sentences),
            paragraphs: ParagraphCount::new(1),
        }
    }

    #[test]
    fn test_basic_report() {
        let report = Report::new(stats(100, 80, 20, 5, 3), None);
        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("文字数:         100"));
        assert!(text.contains("文字数(空白除く): 80"));
        assert!(text.contains("単語数:         20"));
        assert!(text.contains("行数:           5"));
        assert!(text.contains("文数:           3"));
        assert!(text.contains("段落数:         1"));
    }

    #[test]
    fn test_report_with_frequencies() {
        let frequencies = vec![FrequencyEntry::new("hello", 5), FrequencyEntry::new("world", 3)];
        let report = Report::new(stats(10, 8, 3, 1, 1), Some(frequencies));
        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("単語出現頻度"));
        assert!(text.contains("  hello: 5\n  world: 3\n"));
    }

    #[test]
    fn test_report_without_frequencies() {
        let text = render(&Report::new(TextStats::default(), None), OutputFormat::Text).unwrap();
        assert!(!text.contains("単語出現頻度"));
    }

    #[test]
    fn empty_frequency_list_omits_block() {
        let text = render(&Report::new(TextStats::default(), Some(Vec::new())), OutputFormat::Text).unwrap();
        assert!(!text.contains("単語出現頻度"));
    }

    #[test]
    fn json_has_fixed_stat_fields() {
        let report = Report::new(stats(12, 11, 2, 1, 1), Some(vec![FrequencyEntry::new("a", 1)]));
        let value: serde_json::Value = serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["stats"]["characters"], 12);
        assert_eq!(value["stats"]["characters_no_spaces"], 11);
        assert_eq!(value["frequencies"][0]["word"], "a");
        assert_eq!(value["frequencies"][0]["count"], 1);
    }

    #[test]
    fn json_omits_frequencies_when_not_requested() {
        let value: serde_json::Value =
            serde_json::from_str(&render(&Report::new(TextStats::default(), None), OutputFormat::Json).unwrap())
                .unwrap();
        assert!(value.get("frequencies").is_none());
    }

    #[test]
    fn yaml_lists_stats() {
        let yaml = render(&Report::new(stats(3, 3, 1, 1, 0), None), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("characters: 3"));
        assert!(yaml.contains("sentences: 0"));
    }

    #[test]
    fn markdown_ranks_words_in_order() {
        let frequencies = vec![FrequencyEntry::new("b", 2), FrequencyEntry::new("a", 1)];
        let md = render(&Report::new(stats(3, 2, 3, 1, 0), Some(frequencies)), OutputFormat::Md).unwrap();
        assert!(md.contains("| 文字数 | 3 |"));
        assert!(md.contains("| 1 | b | 2 |\n| 2 | a | 1 |"));
    }
}
