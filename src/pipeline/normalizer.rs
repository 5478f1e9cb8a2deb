/*!
 * Language normalization ahead of tokenization.
 *
 * Order of operations:
 * 1. detect spaced fingerspelling ("J O H N") on the original input
 * 2. translate into the pipeline language when the input is in another one
 * 3. merge runs of single letters back into words, if step 1 fired
 * 4. drop filler words
 *
 * Translation is the only step that can suspend or fail, and a failure only
 * means the original text is used.
 */

use std::future::Future;

use log::debug;

use super::rules::TextRules;
use crate::translation::TranslationService;

/// Output of normalization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    /// Text ready for tokenization
    pub text: String,
    /// Filler tokens removed, in input order
    pub elided: Vec<String>,
    /// Whether the input was detected as spaced fingerspelling
    pub fingerspelled: bool,
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// Whether the input looks like letters typed with spaces between them
///
/// At least two single-letter tokens, and single letters make up more than
/// half of all tokens.
pub fn is_spaced_fingerspelling(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let letters = tokens.iter().filter(|token| is_single_letter(token)).count();
    letters >= 2 && letters * 2 > tokens.len()
}

/// Join consecutive single-letter tokens into words
///
/// A run is flushed as one word when a longer token arrives or the input
/// ends; longer tokens pass through unchanged.
pub fn merge_letter_runs(text: &str) -> String {
    let mut merged: Vec<String> = Vec::new();
    let mut run = String::new();

    for token in text.split_whitespace() {
        if is_single_letter(token) {
            run.push_str(token);
            continue;
        }
        if !run.is_empty() {
            merged.push(std::mem::take(&mut run));
        }
        merged.push(token.to_string());
    }
    if !run.is_empty() {
        merged.push(run);
    }

    merged.join(" ")
}

/// Drop filler tokens, keeping the others exactly as written
///
/// Returns the remaining text joined by single spaces and the removed tokens,
/// punctuation-stripped like every other skipped word.
pub fn remove_fillers(text: &str, rules: &TextRules) -> (String, Vec<String>) {
    let mut kept = Vec::new();
    let mut elided = Vec::new();

    for token in text.split_whitespace() {
        let cleaned = rules.clean(token);
        if rules.is_filler_word(&cleaned) {
            elided.push(rules.strip_punctuation(token));
        } else {
            kept.push(token);
        }
    }

    (kept.join(" "), elided)
}

/// Normalizes input text into the pipeline language
#[derive(Debug, Clone)]
pub struct LanguageNormalizer {
    translation: TranslationService,
}

impl LanguageNormalizer {
    /// Create a normalizer using the given translation service
    pub fn new(translation: TranslationService) -> Self {
        Self { translation }
    }

    /// Normalize text written in `language_tag`
    pub async fn normalize(&self, text: &str, language_tag: &str, rules: &TextRules) -> NormalizedText {
        let fingerspelled = is_spaced_fingerspelling(text);
        let translated = if self.translation.needs_translation(language_tag) {
            self.translation.translate_or_original(text, language_tag).await
        } else {
            text.to_string()
        };
        Self::finish(&translated, fingerspelled, rules)
    }

    /// Like `normalize`, but falls back to the original text when `cancel` fires
    pub async fn normalize_until<F>(&self, text: &str, language_tag: &str, rules: &TextRules, cancel: F) -> NormalizedText
    where
        F: Future<Output = ()>,
    {
        let fingerspelled = is_spaced_fingerspelling(text);
        let translated = if self.translation.needs_translation(language_tag) {
            self.translation
                .translate_or_original_until(text, language_tag, cancel)
                .await
        } else {
            text.to_string()
        };
        Self::finish(&translated, fingerspelled, rules)
    }

    /// Steps that follow translation; pure
    pub fn finish(text: &str, fingerspelled: bool, rules: &TextRules) -> NormalizedText {
        let merged = if fingerspelled {
            let merged = merge_letter_runs(text);
            debug!("Merged spaced fingerspelling '{}' into '{}'", text, merged);
            merged
        } else {
            text.to_string()
        };

        let (text, elided) = remove_fillers(&merged, rules);
        NormalizedText {
            text,
            elided,
            fingerspelled,
        }
    }
}
