// crates/domain/src/tokenizer.rs
//! Dual-script word tokenizer.
//!
//! A word is either a maximal run of ASCII letters (`A-Z`, `a-z`) or a maximal
//! run of non-whitespace, non-ASCII code points. ASCII digits, punctuation and
//! whitespace only separate words. CJK text is never segmented further, so
//! `"こんにちは世界"` is a single word.

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Latin,
    Wide,
    Separator,
}

impl CharClass {
    #[inline]
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Latin
        } else if !c.is_ascii() && !c.is_whitespace() {
            Self::Wide
        } else {
            Self::Separator
        }
    }
}

/// Iterator over the words of a text, borrowing from it.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];

        let Some((start, class)) = rest
            .char_indices()
            .map(|(i, c)| (i, CharClass::of(c)))
            .find(|&(_, class)| class != CharClass::Separator)
        else {
            self.pos = self.text.len();
            return None;
        };

        let tail = &rest[start..];
        // Latin の直後に非ASCIIが続く場合も別の単語になる
        let len = tail
            .char_indices()
            .find(|&(_, c)| CharClass::of(c) != class)
            .map_or(tail.len(), |(i, _)| i);

        self.pos += start + len;
        Some(&tail[..len])
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split `text` into words using the dual-script rule.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}
