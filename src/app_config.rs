use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles loading, validating and defaulting the settings that
/// shape the text-to-sign pipeline: word lists, catalog naming, and the
/// optional translation provider.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language the catalog is written in (tag or English name)
    #[serde(default = "default_working_language")]
    pub working_language: String,

    /// Catalog source and video naming settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Word lists and heuristics used while tokenizing
    #[serde(default)]
    pub text: TextConfig,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: No translation, input passes through untouched
    #[default]
    None,
    // @provider: LibreTranslate-compatible REST service
    LibreTranslate,
    // @provider: Anthropic
    Anthropic,
}

impl TranslationProvider {
    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::LibreTranslate => "libretranslate".to_string(),
            Self::Anthropic => "anthropic".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "libretranslate" | "libre" => Ok(Self::LibreTranslate),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Catalog configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory of per-category JSON catalog records
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Host serving the videos
    #[serde(default = "default_cdn_host")]
    pub cdn_host: String,

    /// Account segment of the video path
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,

    /// Version segment of video URLs
    #[serde(default = "default_version_tag")]
    pub version_tag: String,

    /// Version segment of thumbnail URLs
    #[serde(default = "default_version_tag")]
    pub thumb_version_tag: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            cdn_host: default_cdn_host(),
            cloud_name: default_cloud_name(),
            version_tag: default_version_tag(),
            thumb_version_tag: default_version_tag(),
        }
    }
}

/// Word lists and heuristics for normalization and classification
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TextConfig {
    /// Common words that have no sign of their own; skipped with a descriptor
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Disfluencies removed before tokenization
    #[serde(default = "default_filler_words")]
    pub filler_words: Vec<String>,

    /// Characters stripped from every token
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Capitalizable words that are never treated as proper names
    #[serde(default = "default_non_name_words")]
    pub non_name_words: Vec<String>,

    /// Catalog word signed before a fingerspelled name
    #[serde(default = "default_name_start_marker")]
    pub name_start_marker: Option<String>,

    /// Catalog word signed after a fingerspelled name
    #[serde(default = "default_name_end_marker")]
    pub name_end_marker: Option<String>,

    /// Shortest string the substring fallback may match on
    #[serde(default = "default_min_substring_len")]
    pub min_substring_len: usize,

    /// Synthesize a video reference for words the catalog lacks
    #[serde(default = "default_true")]
    pub synthesize_unknown: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            filler_words: default_filler_words(),
            punctuation: default_punctuation(),
            non_name_words: default_non_name_words(),
            name_start_marker: default_name_start_marker(),
            name_end_marker: default_name_end_marker(),
            min_substring_len: default_min_substring_len(),
            synthesize_unknown: true,
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Service endpoint URL (empty means the provider default)
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model name, for LLM-backed providers
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether translated text is cached
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// Maximum number of cached translations
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: String::new(),
            api_key: String::new(),
            model: default_anthropic_model(),
            timeout_secs: default_timeout_secs(),
            cache_enabled: true,
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl TranslationConfig {
    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if !self.endpoint.is_empty() {
            return self.endpoint.clone();
        }

        match self.provider {
            TranslationProvider::None => String::new(),
            TranslationProvider::LibreTranslate => default_libretranslate_endpoint(),
            TranslationProvider::Anthropic => default_anthropic_endpoint(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_working_language() -> String {
    "english".to_string()
}

fn default_cdn_host() -> String {
    "res.cloudinary.com".to_string()
}

fn default_cloud_name() -> String {
    "signflow".to_string()
}

fn default_version_tag() -> String {
    "v1".to_string()
}

fn default_stop_words() -> Vec<String> {
    [
        "a", "an", "the", "is", "am", "are", "was", "were", "be", "been", "being", "to", "of",
        "for", "at", "by", "and", "or", "but", "so", "do", "does", "did", "has", "have", "had",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_filler_words() -> Vec<String> {
    ["um", "umm", "uh", "uhh", "er", "erm", "hmm", "ah"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn default_punctuation() -> String {
    ".,!?;:\"'()[]{}…".to_string()
}

fn default_non_name_words() -> Vec<String> {
    ["i", "me", "my", "mine", "you", "your", "we", "our", "he", "his", "she", "her", "they", "their"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn default_name_start_marker() -> Option<String> {
    Some("name-start".to_string())
}

fn default_name_end_marker() -> Option<String> {
    Some("name-end".to_string())
}

fn default_min_substring_len() -> usize {
    2
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_capacity() -> usize {
    256
}

fn default_true() -> bool {
    true
}

fn default_libretranslate_endpoint() -> String {
    "https://libretranslate.com".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::get_language_name(&self.working_language)?;

        if self.catalog.cdn_host.trim().is_empty() {
            return Err(anyhow!("Catalog CDN host cannot be empty"));
        }
        if self.catalog.cloud_name.trim().is_empty() {
            return Err(anyhow!("Catalog cloud name cannot be empty"));
        }

        if self.translation.provider != TranslationProvider::None && self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be greater than zero"));
        }

        if self.translation.provider == TranslationProvider::Anthropic && self.translation.api_key.is_empty() {
            return Err(anyhow!("Translation API key is required for Anthropic provider"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            working_language: default_working_language(),
            catalog: CatalogConfig::default(),
            text: TextConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
