use crate::policy::{ContentPolicy, Verdict};
use once_cell::sync::Lazy;
use regex::Regex;

/// A run of Cyrillic letters (including `ё`/`Ё`) between Unicode word boundaries
///
/// Boundaries are Unicode-aware, so letters glued to digits or Latin letters
/// (`слово123`, `abcслово`) do not count.
static CYRILLIC_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[а-яА-ЯёЁ]+\b").expect("Cyrillic word pattern is valid"));

/// Counts Cyrillic words in the text
///
/// # Examples
///
/// ```
/// use cyrillic_crawler::policy::count_cyrillic_words;
///
/// assert_eq!(count_cyrillic_words("Привет, мир! Hello world."), 2);
/// assert_eq!(count_cyrillic_words("Ёлка и ёж"), 3);
/// ```
pub fn count_cyrillic_words(text: &str) -> usize {
    CYRILLIC_WORD.find_iter(text).count()
}

/// Returns whether the text has at least `min_words` Cyrillic words, and the count
pub fn accepts(text: &str, min_words: usize) -> (bool, usize) {
    let word_count = count_cyrillic_words(text);
    (word_count >= min_words, word_count)
}

/// Default content policy: a minimum number of Cyrillic words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyrillicWordPolicy {
    min_words: usize,
}

impl CyrillicWordPolicy {
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl ContentPolicy for CyrillicWordPolicy {
    fn evaluate(&self, text: &str) -> Verdict {
        let (accepted, word_count) = accepts(text, self.min_words);
        Verdict {
            accepted,
            word_count,
        }
    }

    fn describe(&self) -> String {
        format!("at least {} Cyrillic words", self.min_words)
    }
}
