use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::TextTranslator;
use crate::errors::ProviderError;
use crate::language_utils;

/// Client for LibreTranslate-compatible translation services
#[derive(Debug)]
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the service
    endpoint: String,
    /// Optional API key
    api_key: Option<String>,
    /// Per-request timeout
    timeout: Duration,
}

/// Translate request body
#[derive(Debug, Serialize)]
pub struct LibreRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: String,
    /// Target language code
    target: String,
    /// Input format
    format: &'static str,
    /// API key, when the server requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translate response body
#[derive(Debug, Deserialize)]
pub struct LibreResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body returned on non-success statuses
#[derive(Debug, Deserialize)]
struct LibreErrorBody {
    error: String,
}

impl LibreTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let api_key = api_key.into();
        Self {
            client: Client::builder().timeout(timeout).build().unwrap_or_default(),
            endpoint: endpoint.into(),
            api_key: (!api_key.is_empty()).then_some(api_key),
            timeout,
        }
    }

    fn translate_url(&self) -> Result<Url, ProviderError> {
        let base = format!("{}/", self.endpoint.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join("translate"))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", self.endpoint, e)))
    }
}

/// Service code for a tag, or the tag itself when it is not a known language
fn code_for(tag: &str) -> String {
    language_utils::service_code(tag).unwrap_or_else(|_| tag.trim().to_lowercase())
}

#[async_trait]
impl TextTranslator for LibreTranslate {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let request = LibreRequest {
            q: text,
            source: code_for(source_language),
            target: code_for(target_language),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.translate_url()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<LibreErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "Failed to get error response text".to_string(),
            };
            error!("LibreTranslate error ({}): {}", status, message);
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(message));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<LibreResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(body.translated_text)
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}
