/*!
 * Word lists and character sets shared by the normalizer and the tokenizer.
 */

use std::collections::HashSet;

use crate::app_config::TextConfig;

/// Compiled text rules
#[derive(Debug, Clone)]
pub struct TextRules {
    stop_words: HashSet<String>,
    filler_words: HashSet<String>,
    punctuation: HashSet<char>,
    non_name_words: HashSet<String>,
    /// Catalog word signed before a fingerspelled name
    pub name_start_marker: Option<String>,
    /// Catalog word signed after a fingerspelled name
    pub name_end_marker: Option<String>,
    /// Shortest string the substring fallback may match on
    pub min_substring_len: usize,
    /// Whether words the catalog lacks get a synthesized video reference
    pub synthesize_unknown: bool,
}

fn word_set<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> HashSet<String> {
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

impl TextRules {
    /// Compile rules from configuration
    pub fn from_config(config: &TextConfig) -> Self {
        Self {
            stop_words: word_set(&config.stop_words),
            filler_words: word_set(&config.filler_words),
            punctuation: config.punctuation.chars().collect(),
            non_name_words: word_set(&config.non_name_words),
            name_start_marker: config.name_start_marker.clone().filter(|m| !m.trim().is_empty()),
            name_end_marker: config.name_end_marker.clone().filter(|m| !m.trim().is_empty()),
            min_substring_len: config.min_substring_len,
            synthesize_unknown: config.synthesize_unknown,
        }
    }

    /// Replace the stop-list
    pub fn with_stop_words<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.stop_words = word_set(words);
        self
    }

    /// Replace the filler list
    pub fn with_filler_words<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.filler_words = word_set(words);
        self
    }

    /// Replace both name markers
    pub fn with_name_markers(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.name_start_marker = start.map(str::to_string);
        self.name_end_marker = end.map(str::to_string);
        self
    }

    /// Turn naming-convention synthesis on or off
    pub fn with_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_unknown = enabled;
        self
    }

    /// Whether a cleaned word is on the stop-list
    pub fn is_stop_word(&self, cleaned: &str) -> bool {
        self.stop_words.contains(cleaned)
    }

    /// Whether a cleaned word is a filler
    pub fn is_filler_word(&self, cleaned: &str) -> bool {
        self.filler_words.contains(cleaned)
    }

    /// Whether a cleaned word is excluded from the proper-name rule
    pub fn is_non_name_word(&self, cleaned: &str) -> bool {
        self.non_name_words.contains(cleaned)
    }

    /// Remove every configured punctuation character
    pub fn strip_punctuation(&self, token: &str) -> String {
        token.chars().filter(|c| !self.punctuation.contains(c)).collect()
    }

    /// Punctuation-stripped, lowercased form used for matching
    pub fn clean(&self, token: &str) -> String {
        self.strip_punctuation(token).to_lowercase()
    }
}

impl Default for TextRules {
    fn default() -> Self {
        Self::from_config(&TextConfig::default())
    }
}
