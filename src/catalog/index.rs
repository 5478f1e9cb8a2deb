/*!
 * Immutable in-memory catalog index.
 *
 * Built once per catalog load from static records, read-only afterwards, so
 * it can be shared across concurrent pipeline runs behind an `Arc`.
 */

use std::collections::HashMap;

use log::{debug, warn};

use super::entry::CatalogEntry;
use super::naming::{VideoNaming, is_absolute_url, slugify};

/// Read-only index over catalog entries
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    /// Entries in catalog iteration order
    entries: Vec<CatalogEntry>,

    /// Lowercased word or transliteration -> index of the first entry carrying it
    exact: HashMap<String, usize>,

    /// Naming convention used for repair and synthesis
    naming: VideoNaming,
}

impl CatalogIndex {
    /// Build an index, repairing or excluding malformed entries
    ///
    /// Entries with an empty word are dropped with a warning, as are entries
    /// with no video whose word has nothing to name one after. Entries with
    /// no video or thumbnail get one synthesized from the naming convention,
    /// and entries with no id get the word's slug.
    pub fn build(records: impl IntoIterator<Item = CatalogEntry>, naming: VideoNaming) -> Self {
        Self::build_with(records, naming, true)
    }

    /// Index records exactly as given, only dropping empty words
    #[cfg(test)]
    pub(crate) fn build_unrepaired(records: impl IntoIterator<Item = CatalogEntry>, naming: VideoNaming) -> Self {
        Self::build_with(records, naming, false)
    }

    fn build_with(records: impl IntoIterator<Item = CatalogEntry>, naming: VideoNaming, repair: bool) -> Self {
        let mut entries = Vec::new();
        let mut exact = HashMap::new();
        let mut repaired = 0usize;

        for mut entry in records {
            let word = entry.word.trim().to_string();
            if word.is_empty() {
                warn!("Excluding catalog entry with empty word (sign id '{}')", entry.sign_id);
                continue;
            }

            if repair {
                let Some(video_url) = repaired_video_url(&entry, &naming) else {
                    warn!(
                        "Excluding catalog entry '{}' (sign id '{}'): no video and the word has nothing to name one after",
                        word, entry.sign_id
                    );
                    continue;
                };

                if video_url != entry.video_url {
                    repaired += 1;
                    debug!("Synthesized video reference for '{}': {}", word, video_url);
                } else if !is_absolute_url(&video_url) {
                    debug!("Catalog entry '{}' has a non-absolute video reference: {}", word, video_url);
                }
                entry.video_url = video_url;

                if entry.thumbnail_url.trim().is_empty() {
                    entry.thumbnail_url = naming.thumbnail_url(&word).unwrap_or_default();
                }
                if entry.sign_id.trim().is_empty() {
                    entry.sign_id = slugify(&word);
                }
            }
            entry.word = word;

            let position = entries.len();
            exact.entry(entry.match_key()).or_insert(position);
            for transliteration in entry.transliterations.values() {
                for value in transliteration.values() {
                    let key = value.trim().to_lowercase();
                    if !key.is_empty() {
                        exact.entry(key).or_insert(position);
                    }
                }
            }

            entries.push(entry);
        }

        debug!(
            "Catalog index built: {} entries, {} lookup keys, {} repaired",
            entries.len(),
            exact.len(),
            repaired
        );

        Self { entries, exact, naming }
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The naming convention the index was built with
    pub fn naming(&self) -> &VideoNaming {
        &self.naming
    }

    /// First entry whose word or any transliteration equals `query`, ignoring case
    pub fn get(&self, query: &str) -> Option<&CatalogEntry> {
        let key = query.trim().to_lowercase();
        self.exact.get(&key).map(|&position| &self.entries[position])
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(entry.category.as_str());
            }
        }
        seen
    }

    /// Entries of one category, in catalog order
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.category == category)
    }
}

/// The entry's video URL, synthesized when missing; `None` when unrepairable
fn repaired_video_url(entry: &CatalogEntry, naming: &VideoNaming) -> Option<String> {
    if entry.has_usable_video() {
        return Some(entry.video_url.clone());
    }
    naming.video_url(&entry.word)
}
