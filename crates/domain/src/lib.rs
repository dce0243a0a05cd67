// crates/domain/src/lib.rs
//! # Domain
//!
//! Pure text analysis: every function here is total over `&str`, performs no
//! I/O and keeps no state between calls.
//!
//! - [`tokenizer`]: the dual-script word rule shared by counting and ranking
//! - [`analyzer`]: scalar statistics ([`TextStats`])
//! - [`frequency`]: word-frequency ranking ([`FrequencyList`])

#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod frequency;
pub mod model;
pub mod tokenizer;

pub use analyzer::{
    analyze, count_characters, count_characters_no_spaces, count_lines, count_paragraphs,
    count_sentences, count_words,
};
pub use frequency::{DEFAULT_TOP_N, get_word_frequencies};
pub use model::{FrequencyEntry, FrequencyList, TextStats};
pub use tokenizer::{Tokens, tokenize};
