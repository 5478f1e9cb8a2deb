/*!
 * Translation service clients.
 *
 * The pipeline works in one language; text in any other language goes
 * through one of these clients first:
 * - LibreTranslate: LibreTranslate-compatible REST service
 * - Anthropic: LLM-backed translation via the Anthropic API
 * - Mock: scripted behaviours for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation clients
///
/// Implementations report failures as `ProviderError`; it is up to
/// `translation::TranslationService` to turn those into a pass-through.
#[async_trait]
pub trait TextTranslator: Send + Sync + Debug {
    /// Translate `text` from `source_language` into `target_language`
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - Language tag of the input
    /// * `target_language` - Language tag wanted back
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}

pub mod anthropic;
pub mod libre;
pub mod mock;
