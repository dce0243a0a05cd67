// crates/domain/src/frequency.rs
use hashbrown::HashMap;

use crate::model::{FrequencyEntry, FrequencyList};
use crate::tokenizer::tokenize;

/// Ranking size used when the caller does not choose one.
pub const DEFAULT_TOP_N: usize = 10;

/// Rank the words of `text` by occurrence, case-insensitively.
///
/// The text is lower-cased before tokenizing, so the returned words are
/// lower-case. At most `top_n` entries are returned, highest count first;
/// words with the same count keep the order of their first occurrence.
pub fn get_word_frequencies(text: &str, top_n: usize) -> FrequencyList {
    if top_n == 0 {
        return FrequencyList::new();
    }

    let lowered = text.to_lowercase();

    // word -> (first index, occurrences)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, word) in tokenize(&lowered).enumerate() {
        counts.entry(word).or_insert((index, 0)).1 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_unstable_by(|(_, (a_first, a_count)), (_, (b_first, b_count))| {
        b_count.cmp(a_count).then_with(|| a_first.cmp(b_first))
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, (_, count))| FrequencyEntry::new(word, count))
        .collect()
}
