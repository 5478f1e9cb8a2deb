/*!
 * Translation caching functionality.
 *
 * A bounded cache of translated text owned by whoever builds the
 * `TranslationService`. Clones share storage; nothing here is global.
 */

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

/// Cache key combining source text, source language, and target language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source_text: String,
    source_language: String,
    target_language: String,
}

impl CacheKey {
    fn new(source_text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            source_text: source_text.to_string(),
            source_language: source_language.trim().to_lowercase(),
            target_language: target_language.trim().to_lowercase(),
        }
    }
}

/// Entries plus insertion order for eviction
#[derive(Debug, Default)]
struct CacheStore {
    entries: HashMap<CacheKey, String>,
    order: VecDeque<CacheKey>,
    hits: usize,
    misses: usize,
}

/// Bounded translation cache, oldest entry evicted first
#[derive(Debug, Clone)]
pub struct TranslationCache {
    store: Arc<RwLock<CacheStore>>,
    capacity: usize,
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache holding at most `capacity` entries
    pub fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::default())),
            capacity,
            enabled: enabled && capacity > 0,
        }
    }

    /// Get a translation from the cache
    pub fn get(&self, source_text: &str, source_language: &str, target_language: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::new(source_text, source_language, target_language);
        let mut store = self.store.write();

        match store.entries.get(&key).cloned() {
            Some(translation) => {
                store.hits += 1;
                debug!("Cache hit for '{}' ({} -> {})", truncate_text(source_text, 30), source_language, target_language);
                Some(translation)
            }
            None => {
                store.misses += 1;
                None
            }
        }
    }

    /// Store a translation in the cache
    pub fn store(&self, source_text: &str, source_language: &str, target_language: &str, translation: &str) {
        if !self.enabled {
            return;
        }

        let key = CacheKey::new(source_text, source_language, target_language);
        let mut store = self.store.write();

        if store.entries.insert(key.clone(), translation.to_string()).is_none() {
            store.order.push_back(key);
        }

        while store.entries.len() > self.capacity {
            let Some(oldest) = store.order.pop_front() else {
                break;
            };
            store.entries.remove(&oldest);
        }
    }

    /// Get cache statistics: hits, misses, hit rate
    pub fn stats(&self) -> (usize, usize, f64) {
        let store = self.store.read();
        let total = store.hits + store.misses;

        let hit_rate = if total > 0 {
            store.hits as f64 / total as f64
        } else {
            0.0
        };

        (store.hits, store.misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        let mut store = self.store.write();
        *store = CacheStore::default();
        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.store.read().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.store.read().entries.is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(true, 256)
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
