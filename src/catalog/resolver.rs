/*!
 * Query resolution against the catalog index.
 *
 * Strategy, first success wins:
 * 1. exact match on word or any transliteration (catalog order breaks ties)
 * 2. an exact match with no playable video is replaced by a synthesized one
 * 3. substring match in either direction, on entries with a playable video
 * 4. synthesis from the naming convention
 *
 * With synthesis enabled (the default) resolution is total: the only `None`
 * comes from queries with nothing to name a file after (empty, whitespace,
 * pure symbols). With it disabled, steps 2 and 4 are skipped and only
 * curated clips are returned.
 */

use std::borrow::Cow;

use log::trace;

use super::entry::CatalogEntry;
use super::index::CatalogIndex;
use super::naming::slugify;

/// Category given to synthesized entries
pub const GENERATED_CATEGORY: &str = "generated";

/// How a resolution was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    Synthesized,
}

/// A playable video reference and the entry it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub video_url: String,
    /// Borrowed for catalog hits, owned for synthesized entries
    pub entry: Cow<'a, CatalogEntry>,
    pub kind: MatchKind,
}

impl Resolution<'_> {
    /// Whether the video reference was fabricated rather than curated
    pub fn is_synthesized(&self) -> bool {
        self.kind == MatchKind::Synthesized
    }
}

/// Resolves query strings to playable video references
#[derive(Debug, Clone, Copy)]
pub struct CatalogResolver<'a> {
    index: &'a CatalogIndex,
    min_substring_len: usize,
    allow_synthesis: bool,
}

impl<'a> CatalogResolver<'a> {
    /// Create a resolver over an index
    pub fn new(index: &'a CatalogIndex, min_substring_len: usize) -> Self {
        Self {
            index,
            min_substring_len,
            allow_synthesis: true,
        }
    }

    /// Enable or disable naming-convention synthesis in `resolve`
    pub fn with_synthesis(mut self, allow: bool) -> Self {
        self.allow_synthesis = allow;
        self
    }

    /// Full resolution, including synthesis when enabled
    pub fn resolve(&self, query: &str) -> Option<Resolution<'a>> {
        self.lookup(query, self.allow_synthesis)
    }

    /// Resolution restricted to curated catalog entries (no synthesis)
    pub fn find_in_catalog(&self, query: &str) -> Option<Resolution<'a>> {
        self.lookup(query, false)
    }

    /// Exact match with a playable video, nothing else
    pub fn exact(&self, query: &str) -> Option<Resolution<'a>> {
        let entry = self.index.get(query)?;
        if !entry.has_usable_video() {
            return None;
        }
        Some(Resolution {
            video_url: entry.video_url.clone(),
            entry: Cow::Borrowed(entry),
            kind: MatchKind::Exact,
        })
    }

    /// Build an ephemeral entry from the naming convention
    pub fn synthesize(&self, query: &str) -> Option<Resolution<'a>> {
        let naming = self.index.naming();
        let video_url = naming.video_url(query)?;
        let word = query.trim();

        let mut entry = CatalogEntry::new(word, video_url.clone()).with_category(GENERATED_CATEGORY);
        entry.thumbnail_url = naming.thumbnail_url(word).unwrap_or_default();
        entry.sign_id = slugify(word);

        Some(Resolution {
            video_url,
            entry: Cow::Owned(entry),
            kind: MatchKind::Synthesized,
        })
    }

    fn lookup(&self, query: &str, allow_synthesis: bool) -> Option<Resolution<'a>> {
        let key = query.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(entry) = self.index.get(&key) {
            if entry.has_usable_video() {
                trace!("Exact catalog match for '{}'", key);
                return Some(Resolution {
                    video_url: entry.video_url.clone(),
                    entry: Cow::Borrowed(entry),
                    kind: MatchKind::Exact,
                });
            }

            if allow_synthesis {
                if let Some(synthesized) = self.synthesize(query) {
                    trace!("Exact match for '{}' had no video, synthesized one", key);
                    return Some(Resolution {
                        video_url: synthesized.video_url.clone(),
                        entry: Cow::Owned(CatalogEntry {
                            video_url: synthesized.video_url,
                            ..entry.clone()
                        }),
                        kind: MatchKind::Synthesized,
                    });
                }
            }
        }

        if let Some(resolution) = self.substring_match(&key) {
            return Some(resolution);
        }

        if allow_synthesis {
            let synthesized = self.synthesize(query);
            if synthesized.is_some() {
                trace!("No catalog match for '{}', synthesized a reference", key);
            }
            return synthesized;
        }

        None
    }

    fn substring_match(&self, key: &str) -> Option<Resolution<'a>> {
        let key_len = key.chars().count();

        self.index
            .entries()
            .iter()
            .filter(|entry| entry.has_usable_video())
            .find(|entry| {
                let word = entry.match_key();
                let shorter = key_len.min(word.chars().count());
                shorter >= self.min_substring_len && (word.contains(key) || key.contains(word.as_str()))
            })
            .map(|entry| {
                trace!("Substring catalog match for '{}': '{}'", key, entry.word);
                Resolution {
                    video_url: entry.video_url.clone(),
                    entry: Cow::Borrowed(entry),
                    kind: MatchKind::Substring,
                }
            })
    }
}
