/*!
 * Core translation service implementation.
 *
 * Wraps a `TextTranslator` with a timeout, a cache and cancellation, and
 * exposes the pass-through contract the pipeline relies on: whatever goes
 * wrong, the caller gets text back.
 */

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, warn};

use super::cache::TranslationCache;
use crate::app_config::{Config, TranslationProvider};
use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::TextTranslator;
use crate::providers::anthropic::Anthropic;
use crate::providers::libre::LibreTranslate;

/// Translation service for bringing input into the pipeline language
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Provider client; `None` means every call passes through
    translator: Option<Arc<dyn TextTranslator>>,

    /// Cache of successful translations
    cache: TranslationCache,

    /// Upper bound for a single provider call
    timeout: Duration,

    /// Language translations are requested into
    target_language: String,
}

impl TranslationService {
    /// Create a service around a provider client
    pub fn new(
        translator: Arc<dyn TextTranslator>,
        target_language: impl Into<String>,
        timeout: Duration,
        cache: TranslationCache,
    ) -> Self {
        Self {
            translator: Some(translator),
            cache,
            timeout,
            target_language: target_language.into(),
        }
    }

    /// Create a service that never calls out and returns input unchanged
    pub fn passthrough(target_language: impl Into<String>) -> Self {
        Self {
            translator: None,
            cache: TranslationCache::new(false, 0),
            timeout: Duration::ZERO,
            target_language: target_language.into(),
        }
    }

    /// Create a service from the application configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let translation = &config.translation;
        let timeout = Duration::from_secs(translation.timeout_secs);
        let cache = TranslationCache::new(translation.cache_enabled, translation.cache_capacity);

        let translator: Arc<dyn TextTranslator> = match translation.provider {
            TranslationProvider::None => return Ok(Self::passthrough(config.working_language.as_str())),
            TranslationProvider::LibreTranslate => Arc::new(LibreTranslate::new(
                translation.get_endpoint(),
                translation.api_key.as_str(),
                timeout,
            )),
            TranslationProvider::Anthropic => Arc::new(Anthropic::new(
                translation.api_key.as_str(),
                translation.get_endpoint(),
                translation.model.as_str(),
                timeout,
            )),
        };

        Ok(Self::new(translator, config.working_language.as_str(), timeout, cache))
    }

    /// The cache used by this service
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Whether text in `source_language` must be translated first
    pub fn needs_translation(&self, source_language: &str) -> bool {
        !language_utils::same_language(source_language, &self.target_language)
    }

    /// Translate text, reporting failures
    ///
    /// Text already in the target language, and services without a
    /// provider, return the input unchanged.
    pub async fn translate(&self, text: &str, source_language: &str) -> Result<String, ProviderError> {
        let Some(translator) = &self.translator else {
            return Ok(text.to_string());
        };
        if !self.needs_translation(source_language) {
            return Ok(text.to_string());
        }

        if let Some(cached) = self.cache.get(text, source_language, &self.target_language) {
            return Ok(cached);
        }

        let start = Instant::now();
        let call = translator.translate(text, source_language, &self.target_language);
        let translated = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => return Err(ProviderError::Timeout(self.timeout.as_millis() as u64)),
        };

        let translated = translated.trim().to_string();
        if translated.is_empty() {
            return Err(ProviderError::ParseError("Provider returned an empty translation".to_string()));
        }

        debug!(
            "Translated {} chars via {} in {:?}",
            text.len(),
            translator.name(),
            start.elapsed()
        );
        self.cache.store(text, source_language, &self.target_language, &translated);
        Ok(translated)
    }

    /// Translate text, falling back to the original on any failure
    pub async fn translate_or_original(&self, text: &str, source_language: &str) -> String {
        match self.translate(text, source_language).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation from '{}' unavailable, using original text: {}", source_language, e);
                text.to_string()
            }
        }
    }

    /// Like `translate_or_original`, but gives up when `cancel` completes first
    pub async fn translate_or_original_until<F>(&self, text: &str, source_language: &str, cancel: F) -> String
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                warn!("{}; using original text", ProviderError::Cancelled);
                text.to_string()
            }
            translated = self.translate_or_original(text, source_language) => translated,
        }
    }
}
