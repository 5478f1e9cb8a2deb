/*!
 * Text-to-sign resolution pipeline.
 *
 * text ─> normalizer ─> tokenizer/classifier ─┬─> catalog resolver ───────┬─> assembler
 *                                             └─> fingerspelling expander ┘
 *
 * Only the normalizer may suspend (translation). Everything after it is a
 * pure function of the normalized text and the read-only catalog index, so
 * concurrent calls share the index without locking.
 *
 * - `rules`: word lists and punctuation shared by all stages
 * - `normalizer`: translation, fingerspelling merge, filler removal
 * - `tokenizer`: tokens and their classification
 * - `fingerspelling`: proper names as letter sequences
 * - `assembler`: descriptors, playlist and word lists
 */

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::app_config::Config;
use crate::catalog::{CatalogIndex, CatalogResolver};
use crate::translation::TranslationService;

pub use self::assembler::{SignDescriptor, TokenOutcome, TranslationResult, assemble};
pub use self::fingerspelling::FingerspellingExpander;
pub use self::normalizer::{LanguageNormalizer, NormalizedText};
pub use self::rules::TextRules;
pub use self::tokenizer::{Classification, Classifier, Token, tokenize};

pub mod assembler;
pub mod fingerspelling;
pub mod normalizer;
pub mod rules;
pub mod tokenizer;

/// The public entry point: text in, playable sign sequence out
#[derive(Debug, Clone)]
pub struct SignPipeline {
    index: Arc<CatalogIndex>,
    rules: TextRules,
    normalizer: LanguageNormalizer,
}

impl SignPipeline {
    /// Create a pipeline over a catalog index
    pub fn new(index: Arc<CatalogIndex>, rules: TextRules, translation: TranslationService) -> Self {
        Self {
            index,
            rules,
            normalizer: LanguageNormalizer::new(translation),
        }
    }

    /// Create a pipeline from the application configuration
    pub fn from_config(config: &Config, index: Arc<CatalogIndex>) -> Result<Self> {
        let translation = TranslationService::from_config(config)?;
        Ok(Self::new(index, TextRules::from_config(&config.text), translation))
    }

    /// The catalog index in use
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Translate text written in `language_tag` into a sign sequence
    ///
    /// Never fails: translation problems fall back to the original text and
    /// unresolved words show up in `missing_words`. Empty input yields an
    /// empty result.
    pub async fn translate_to_signs(&self, text: &str, language_tag: &str) -> TranslationResult {
        if text.trim().is_empty() {
            return TranslationResult::default();
        }

        let normalized = self.normalizer.normalize(text, language_tag, &self.rules).await;
        self.resolve_normalized(normalized)
    }

    /// Like `translate_to_signs`; if `cancel` completes while translation is
    /// pending, the original text is used instead
    pub async fn translate_to_signs_until<F>(&self, text: &str, language_tag: &str, cancel: F) -> TranslationResult
    where
        F: Future<Output = ()>,
    {
        if text.trim().is_empty() {
            return TranslationResult::default();
        }

        let normalized = self
            .normalizer
            .normalize_until(text, language_tag, &self.rules, cancel)
            .await;
        self.resolve_normalized(normalized)
    }

    /// Resolve words already produced by a recognizer, skipping normalization
    pub fn resolve_recognized<S: AsRef<str>>(&self, words: &[S]) -> TranslationResult {
        let tokens = tokenizer::tokens_from_words(words.iter(), &self.rules);
        self.resolve_tokens(&tokens, Vec::new())
    }

    /// Resolve normalizer output
    pub fn resolve_normalized(&self, normalized: NormalizedText) -> TranslationResult {
        let tokens = tokenize(&normalized.text, &self.rules);
        self.resolve_tokens(&tokens, normalized.elided)
    }

    fn resolve_tokens(&self, tokens: &[Token], elided: Vec<String>) -> TranslationResult {
        let resolver =
            CatalogResolver::new(&self.index, self.rules.min_substring_len).with_synthesis(self.rules.synthesize_unknown);
        let classifier = Classifier::new(resolver, &self.rules);
        let expander = FingerspellingExpander::new(resolver, &self.rules);

        let outcomes = tokens.iter().map(|token| {
            let classification = classifier.classify(token);
            resolve_token(token, classification, &resolver, &expander)
        });

        let result = assemble(std::iter::once(TokenOutcome::elided(elided)).chain(outcomes));
        debug!(
            "Resolved {} tokens: {} signs, {} playable, {} missing, {} skipped",
            tokens.len(),
            result.signs.len(),
            result.playlist.len(),
            result.missing_words.len(),
            result.skipped_words.len()
        );
        result
    }
}

/// Route one classified token to the resolver or the expander
fn resolve_token(
    token: &Token,
    classification: Classification<'_>,
    resolver: &CatalogResolver<'_>,
    expander: &FingerspellingExpander<'_>,
) -> TokenOutcome {
    let surface = token.surface.as_str();

    match classification {
        Classification::CommonWord => {
            TokenOutcome::skipped(SignDescriptor::not_found(surface, token.position).common_word(), surface)
        }
        Classification::SingleLetter => {
            let resolution = resolver.resolve(&token.cleaned);
            let descriptor = SignDescriptor::from_resolution(surface, token.position, resolution.as_ref()).letter();
            TokenOutcome::single(descriptor, surface)
        }
        Classification::CatalogWord(resolution) => {
            TokenOutcome::single(SignDescriptor::found(surface, token.position, &resolution), surface)
        }
        Classification::ProperName => expander.expand(token),
        Classification::Unknown => {
            let resolution = resolver.resolve(&token.cleaned);
            TokenOutcome::single(
                SignDescriptor::from_resolution(surface, token.position, resolution.as_ref()),
                surface,
            )
        }
    }
}
