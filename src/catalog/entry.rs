/*!
 * Catalog entry model.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spelling(s) of a sign's word in another language or script
///
/// Catalog sources write either a single string or a list; both shapes
/// deserialize here and callers go through [`Transliteration::values`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transliteration {
    Single(String),
    Multiple(Vec<String>),
}

impl Transliteration {
    /// All spellings, whatever the stored shape
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// One known sign in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Canonical label
    pub word: String,

    /// Language tag -> spelling(s)
    #[serde(default)]
    pub transliterations: BTreeMap<String, Transliteration>,

    /// Absolute video URL; repaired at index build when empty
    #[serde(default)]
    pub video_url: String,

    #[serde(default)]
    pub thumbnail_url: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub related_signs: Vec<String>,

    /// Stable identifier; the word's slug when the source has none
    #[serde(default)]
    pub sign_id: String,
}

impl CatalogEntry {
    /// Create an entry with just a word and a video reference
    pub fn new(word: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            transliterations: BTreeMap::new(),
            video_url: video_url.into(),
            thumbnail_url: String::new(),
            category: String::new(),
            related_signs: Vec::new(),
            sign_id: String::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add a transliteration for a language
    pub fn with_transliteration(mut self, language: impl Into<String>, value: Transliteration) -> Self {
        self.transliterations.insert(language.into(), value);
        self
    }

    /// Whether the entry carries a video reference that can be played
    pub fn has_usable_video(&self) -> bool {
        !self.video_url.trim().is_empty()
    }

    /// Lowercased canonical word, as used for matching
    pub fn match_key(&self) -> String {
        self.word.trim().to_lowercase()
    }
}
