// crates/domain/src/model.rs
use serde::{Deserialize, Serialize};
use text_stats_shared_kernel::{CharCount, LineCount, ParagraphCount, SentenceCount, WordCount};

/// テキスト全体の統計値
///
/// Each field is derived independently from the same input; no field is
/// computed from another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: CharCount,
    pub characters_no_spaces: CharCount,
    pub words: WordCount,
    pub lines: LineCount,
    pub sentences: SentenceCount,
    pub paragraphs: ParagraphCount,
}

impl TextStats {
    /// `true` when every count is zero, which is the case only for empty input.
    ///
    /// Whitespace-only input still has characters and lines.
    pub fn is_empty(&self) -> bool {
        self.characters.is_zero()
            && self.words.is_zero()
            && self.lines.is_zero()
            && self.sentences.is_zero()
            && self.paragraphs.is_zero()
    }
}

/// One ranked word with its number of occurrences (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

impl PartialEq<(&str, usize)> for FrequencyEntry {
    fn eq(&self, other: &(&str, usize)) -> bool {
        self.word == other.0 && self.count == other.1
    }
}

/// 出現回数の降順に並んだ単語リスト
pub type FrequencyList = Vec<FrequencyEntry>;
