/*!
 * Video reference naming convention.
 *
 * Both the catalog build (repairing rows without a video) and the resolver
 * (synthesizing a clip for an unknown word) derive URLs here:
 *
 * `https://{cdn_host}/{cloud_name}/video/upload/{version_tag}/{slug}.mp4`
 * `https://{cdn_host}/{cloud_name}/image/upload/{thumb_version_tag}/thumbnails/{slug}.jpg`
 */

use url::Url;

use crate::app_config::CatalogConfig;
use crate::errors::CatalogError;

/// Slug for a word: trimmed, lowercased, whitespace runs collapsed to `_`
pub fn slugify(word: &str) -> String {
    word.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}

/// Whether a reference is an absolute http(s) URL
pub fn is_absolute_url(reference: &str) -> bool {
    Url::parse(reference)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Builds video and thumbnail references from words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoNaming {
    cdn_host: String,
    cloud_name: String,
    version_tag: String,
    thumb_version_tag: String,
}

impl VideoNaming {
    /// Create a naming convention from its parts
    pub fn new(
        cdn_host: impl Into<String>,
        cloud_name: impl Into<String>,
        version_tag: impl Into<String>,
        thumb_version_tag: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let naming = Self {
            cdn_host: cdn_host.into().trim().trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into().trim().trim_matches('/').to_string(),
            version_tag: version_tag.into().trim().trim_matches('/').to_string(),
            thumb_version_tag: thumb_version_tag.into().trim().trim_matches('/').to_string(),
        };

        if naming.cdn_host.is_empty() {
            return Err(CatalogError::InvalidNaming("CDN host is empty".to_string()));
        }
        if naming.cloud_name.is_empty() {
            return Err(CatalogError::InvalidNaming("cloud name is empty".to_string()));
        }

        Ok(naming)
    }

    /// Create a naming convention from the catalog configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.cdn_host.as_str(),
            config.cloud_name.as_str(),
            config.version_tag.as_str(),
            config.thumb_version_tag.as_str(),
        )
    }

    /// Video URL for a word, or `None` when the word has nothing to name a file after
    pub fn video_url(&self, word: &str) -> Option<String> {
        let slug = nameable_slug(word)?;
        Some(format!(
            "https://{}/{}/video/upload/{}/{}.mp4",
            self.cdn_host, self.cloud_name, self.version_tag, slug
        ))
    }

    /// Thumbnail URL for a word
    pub fn thumbnail_url(&self, word: &str) -> Option<String> {
        let slug = nameable_slug(word)?;
        Some(format!(
            "https://{}/{}/image/upload/{}/thumbnails/{}.jpg",
            self.cdn_host, self.cloud_name, self.thumb_version_tag, slug
        ))
    }
}

fn nameable_slug(word: &str) -> Option<String> {
    if !word.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(slugify(word))
}
