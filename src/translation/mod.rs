/*!
 * Translation service used to bring input text into the pipeline language.
 *
 * - `core`: the pass-through translation service (timeout, cancellation)
 * - `cache`: bounded, caller-owned cache of translated text
 */

// Re-export main types for easier usage
pub use self::cache::TranslationCache;
pub use self::core::TranslationService;

// Submodules
pub mod cache;
pub mod core;
