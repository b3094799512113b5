//! Stateless word utilities: sorting and vowel counting.

use indexmap::IndexMap;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Requested ordering for a word list. Unknown orders leave the list as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
    Unsorted,
}

impl From<&str> for SortOrder {
    fn from(order: &str) -> Self {
        match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => SortOrder::Unsorted,
        }
    }
}

/// Sorts words by code point in the requested order.
pub fn sort_words(mut words: Vec<String>, order: SortOrder) -> Vec<String> {
    match order {
        SortOrder::Asc => words.sort(),
        SortOrder::Desc => words.sort_by(|a, b| b.cmp(a)),
        SortOrder::Unsorted => {}
    }
    words
}

/// Counts lowercase vowels in a word after ASCII transliteration.
pub fn vowel_count(word: &str) -> usize {
    deunicode::deunicode(word)
        .chars()
        .filter(|c| VOWELS.contains(c))
        .count()
}

/// Maps every word to its vowel count, keeping the input order.
pub fn count_vowels(words: &[String]) -> IndexMap<String, usize> {
    words
        .iter()
        .map(|word| (word.clone(), vowel_count(word)))
        .collect()
}
