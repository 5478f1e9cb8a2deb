/*!
 * Static catalog sources.
 *
 * A catalog is a directory of per-category JSON records:
 *
 * ```json
 * { "category": "greetings",
 *   "signs": [ { "word": "hello", "videoUrl": "https://...", "transliterations": { "es": "hola" } } ] }
 * ```
 *
 * Files are read in file-name order so the catalog iteration order, and with
 * it every tie-break in the resolver, is stable across loads.
 */

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use super::entry::CatalogEntry;
use crate::errors::CatalogError;
use crate::file_utils::FileManager;

/// One per-category catalog record
#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub signs: Vec<CatalogEntry>,
}

impl CategoryRecord {
    /// Entries with the record's category filled in where missing
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        let category = self.category;
        self.signs
            .into_iter()
            .map(|mut entry| {
                if entry.category.trim().is_empty() {
                    entry.category = category.clone();
                }
                entry
            })
            .collect()
    }
}

/// Parse a single category record from JSON
pub fn load_catalog_str(json: &str, source: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let record: CategoryRecord = serde_json::from_str(json).map_err(|e| CatalogError::Parse {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(record.into_entries())
}

/// Load every `*.json` category record under a directory
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let files = FileManager::find_files(dir, "json").map_err(|e| CatalogError::Io {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut entries = Vec::new();
    for file in &files {
        let json = FileManager::read_to_string(file).map_err(|e| CatalogError::Io {
            path: file.clone(),
            message: format!("{:#}", e),
        })?;
        let record_entries = load_catalog_str(&json, file)?;
        debug!("Loaded {} catalog entries from {:?}", record_entries.len(), file);
        entries.extend(record_entries);
    }

    info!("Loaded {} catalog entries from {} file(s) in {:?}", entries.len(), files.len(), dir);
    Ok(entries)
}
