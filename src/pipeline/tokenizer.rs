/*!
 * Tokenization and token classification.
 */

use super::rules::TextRules;
use crate::catalog::{CatalogResolver, Resolution};

/// One word of normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as written, punctuation removed
    pub surface: String,
    /// Lowercased surface
    pub cleaned: String,
    /// Index in the filtered token stream
    pub position: usize,
}

/// What a token is, decided by the first matching rule
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    /// On the stop-list; skipped
    CommonWord,
    /// A lone letter
    SingleLetter,
    /// Curated catalog match
    CatalogWord(Resolution<'a>),
    /// Capitalized word with no catalog match; fingerspelled
    ProperName,
    /// None of the above
    Unknown,
}

/// Build tokens from raw words, dropping those that are empty after stripping
pub fn tokens_from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>, rules: &TextRules) -> Vec<Token> {
    words
        .into_iter()
        .map(|word| rules.strip_punctuation(word.as_ref().trim()))
        .filter(|surface| !surface.trim().is_empty())
        .enumerate()
        .map(|(position, surface)| Token {
            cleaned: surface.to_lowercase(),
            surface,
            position,
        })
        .collect()
}

/// Split normalized text into tokens
pub fn tokenize(text: &str, rules: &TextRules) -> Vec<Token> {
    tokens_from_words(text.split_whitespace(), rules)
}

/// Capitalization heuristic for proper names
///
/// True when the surface starts with an uppercase letter or has one later
/// on, unless the word is a capitalizable pronoun. Lowercase names and
/// sentence-initial common words are misclassified; that is accepted.
pub fn looks_like_proper_name(token: &Token, rules: &TextRules) -> bool {
    token.surface.chars().any(char::is_uppercase) && !rules.is_non_name_word(&token.cleaned)
}

/// Classifies tokens against the text rules and the catalog
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    resolver: CatalogResolver<'a>,
    rules: &'a TextRules,
}

impl<'a> Classifier<'a> {
    /// Create a classifier
    pub fn new(resolver: CatalogResolver<'a>, rules: &'a TextRules) -> Self {
        Self { resolver, rules }
    }

    /// Classify one token; first matching rule wins
    pub fn classify(&self, token: &Token) -> Classification<'a> {
        if self.rules.is_stop_word(&token.cleaned) {
            return Classification::CommonWord;
        }

        let mut chars = token.cleaned.chars();
        if matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic()) {
            return Classification::SingleLetter;
        }

        if let Some(resolution) = self.resolver.find_in_catalog(&token.cleaned) {
            return Classification::CatalogWord(resolution);
        }

        if looks_like_proper_name(token, self.rules) {
            return Classification::ProperName;
        }

        Classification::Unknown
    }
}
