// crates/domain/src/analyzer.rs
use text_stats_shared_kernel::{CharCount, LineCount, ParagraphCount, SentenceCount, WordCount};

use crate::model::TextStats;
use crate::tokenizer::tokenize;

/// 文の区切り文字 (半角/全角)
const SENTENCE_DELIMITERS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Whitespace for trimming and blank detection.
///
/// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Number of code points, whitespace and newlines included.
pub fn count_characters(text: &str) -> CharCount {
    CharCount::new(bytecount::num_chars(text.as_bytes()))
}

/// Number of code points excluding ASCII space, tab and newline.
///
/// Other whitespace (`'\r'`, U+3000 and so on) is still counted.
pub fn count_characters_no_spaces(text: &str) -> CharCount {
    CharCount::new(
        text.chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
            .count(),
    )
}

/// Number of words under the dual-script rule of [`crate::tokenizer`].
pub fn count_words(text: &str) -> WordCount {
    WordCount::new(tokenize(text).count())
}

/// `0` for empty text, otherwise the newline count plus one.
///
/// A trailing newline therefore adds an empty last line.
pub fn count_lines(text: &str) -> LineCount {
    if text.is_empty() {
        return LineCount::zero();
    }
    LineCount::new(bytecount::count(text.as_bytes(), b'\n') + 1)
}

/// Number of non-blank segments between runs of sentence delimiters.
pub fn count_sentences(text: &str) -> SentenceCount {
    let sentences = text
        .trim_matches(is_blank_char)
        .split(SENTENCE_DELIMITERS)
        .filter(|segment| !is_blank(segment))
        .count();
    SentenceCount::new(sentences)
}

/// Number of blocks separated by one or more blank lines.
///
/// Splitting on `newline, whitespace*, newline` leaves exactly the maximal
/// runs of non-blank lines, so those runs are counted directly.
pub fn count_paragraphs(text: &str) -> ParagraphCount {
    let mut paragraphs = 0;
    let mut in_paragraph = false;

    for line in text.split('\n') {
        if is_blank(line) {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }

    ParagraphCount::new(paragraphs)
}

/// Compute every statistic of `text`, each one independently.
pub fn analyze(text: &str) -> TextStats {
    TextStats {
        characters: count_characters(text),
        characters_no_spaces: count_characters_no_spaces(text),
        words: count_words(text),
        lines: count_lines(text),
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
    }
}
