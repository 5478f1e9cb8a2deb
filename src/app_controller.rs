use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::app_config::Config;
use crate::catalog::{CatalogIndex, VideoNaming, loader};
use crate::language_utils;
use crate::pipeline::{SignPipeline, TranslationResult};

// @module: Application controller wiring config, catalog and pipeline

/// Output format for a translation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One playable video URL per line
    Playlist,
    /// Full result as pretty JSON
    Json,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline over the loaded catalog
    pipeline: SignPipeline,
}

impl Controller {
    /// Create a controller with default configuration and an empty catalog
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Load the catalog named by the config and build the pipeline
    pub fn with_config(config: Config) -> Result<Self> {
        let naming = VideoNaming::from_config(&config.catalog).context("Invalid catalog naming settings")?;

        let records = match &config.catalog.data_dir {
            Some(dir) => loader::load_catalog_dir(dir)
                .with_context(|| format!("Failed to load catalog from {:?}", dir))?,
            None => {
                warn!("No catalog directory configured; every word will use a synthesized video reference");
                Vec::new()
            }
        };

        let index = Arc::new(CatalogIndex::build(records, naming));
        info!(
            "Catalog ready: {} entries in {} categories",
            index.len(),
            index.categories().len()
        );

        let pipeline = SignPipeline::from_config(&config, index)?;
        Ok(Self { config, pipeline })
    }

    /// Translate text; `language` defaults to the working language
    pub async fn translate(&self, text: &str, language: Option<&str>) -> TranslationResult {
        let language = language.unwrap_or(&self.config.working_language);
        debug!(
            "Translating {} characters from {}",
            text.len(),
            language_utils::get_language_name(language).unwrap_or_else(|_| language.to_string())
        );

        let result = self.pipeline.translate_to_signs(text, language).await;
        if !result.missing_words.is_empty() {
            warn!("No sign found for: {}", result.missing_words.join(", "));
        }
        result
    }

    /// Render a result in the requested format
    pub fn render(result: &TranslationResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).context("Failed to serialize translation result")
            }
            OutputFormat::Playlist => Ok(result.playlist.join("\n")),
        }
    }

    /// Number of entries per category, in catalog order
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let index = self.pipeline.index();
        index
            .categories()
            .into_iter()
            .map(|category| (category.to_string(), index.by_category(category).count()))
            .collect()
    }
}
