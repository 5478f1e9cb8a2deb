/*!
 * Result types and playlist assembly.
 */

use serde::{Deserialize, Serialize};

use crate::catalog::Resolution;

/// Per-token (or per-letter) result record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDescriptor {
    /// Display text
    pub word: String,
    pub video_url: Option<String>,
    pub found: bool,
    /// Position of the source token
    pub index: usize,
    pub is_common_word: bool,
    pub is_letter: bool,
    pub is_name_letter: bool,
    pub is_name_indicator: bool,
    pub letter_position: Option<usize>,
    pub name_length: Option<usize>,
    /// Video reference built from the naming convention, not the catalog
    pub synthesized: bool,
}

impl SignDescriptor {
    /// Descriptor for a resolved word
    pub fn found(word: impl Into<String>, index: usize, resolution: &Resolution<'_>) -> Self {
        Self {
            word: word.into(),
            video_url: Some(resolution.video_url.clone()),
            found: true,
            index,
            synthesized: resolution.is_synthesized(),
            ..Default::default()
        }
    }

    /// Descriptor for a word with no video
    pub fn not_found(word: impl Into<String>, index: usize) -> Self {
        Self {
            word: word.into(),
            index,
            ..Default::default()
        }
    }

    /// Descriptor from an optional resolution
    pub fn from_resolution(word: impl Into<String>, index: usize, resolution: Option<&Resolution<'_>>) -> Self {
        match resolution {
            Some(resolution) => Self::found(word, index, resolution),
            None => Self::not_found(word, index),
        }
    }

    /// Mark as a skipped common word
    pub fn common_word(mut self) -> Self {
        self.is_common_word = true;
        self
    }

    /// Mark as a standalone letter
    pub fn letter(mut self) -> Self {
        self.is_letter = true;
        self.letter_position = Some(0);
        self.name_length = Some(1);
        self
    }

    /// Mark as letter `position` of a fingerspelled name of `length` letters
    pub fn name_letter(mut self, position: usize, length: usize) -> Self {
        self.is_name_letter = true;
        self.letter_position = Some(position);
        self.name_length = Some(length);
        self
    }

    /// Mark as a name start/end marker
    pub fn name_indicator(mut self) -> Self {
        self.is_name_indicator = true;
        self
    }
}

/// Everything one token contributes to the result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenOutcome {
    pub descriptors: Vec<SignDescriptor>,
    /// Failure records, in the order they occurred
    pub missing: Vec<String>,
    pub skipped: Vec<String>,
}

impl TokenOutcome {
    /// Outcome with a single descriptor; a miss is recorded under `surface`
    pub fn single(descriptor: SignDescriptor, surface: &str) -> Self {
        let missing = if descriptor.found {
            Vec::new()
        } else {
            vec![surface.to_string()]
        };
        Self {
            descriptors: vec![descriptor],
            missing,
            skipped: Vec::new(),
        }
    }

    /// Outcome of a skipped common word
    pub fn skipped(descriptor: SignDescriptor, surface: &str) -> Self {
        Self {
            descriptors: vec![descriptor],
            missing: Vec::new(),
            skipped: vec![surface.to_string()],
        }
    }

    /// Words removed before tokenization; no descriptors
    pub fn elided(words: Vec<String>) -> Self {
        Self {
            skipped: words,
            ..Default::default()
        }
    }
}

/// Final pipeline output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Descriptors in token order, name expansions inline
    pub signs: Vec<SignDescriptor>,
    /// Video URLs of found descriptors, same order
    pub playlist: Vec<String>,
    pub missing_words: Vec<String>,
    pub skipped_words: Vec<String>,
}

impl TranslationResult {
    /// Whether nothing was produced
    pub fn is_empty(&self) -> bool {
        self.signs.is_empty() && self.skipped_words.is_empty()
    }

    /// Number of found descriptors
    pub fn found_count(&self) -> usize {
        self.signs.iter().filter(|sign| sign.found).count()
    }
}

/// Merge per-token outcomes, in order, into the final result
///
/// Missing words equal to any skipped word are dropped; duplicates among
/// the rest are kept.
pub fn assemble(outcomes: impl IntoIterator<Item = TokenOutcome>) -> TranslationResult {
    let mut signs = Vec::new();
    let mut missing = Vec::new();
    let mut skipped = Vec::new();

    for outcome in outcomes {
        signs.extend(outcome.descriptors);
        missing.extend(outcome.missing);
        skipped.extend(outcome.skipped);
    }

    let playlist = signs
        .iter()
        .filter(|sign| sign.found)
        .filter_map(|sign| sign.video_url.clone())
        .collect();

    let missing_words = missing
        .into_iter()
        .filter(|word| !skipped.contains(word))
        .collect();

    TranslationResult {
        signs,
        playlist,
        missing_words,
        skipped_words: skipped,
    }
}
