/*!
 * # signflow - text to sign-language video sequences
 *
 * A Rust library that turns free-form text into an ordered, playable
 * sequence of sign-language video clips.
 *
 * ## Features
 *
 * - Immutable catalog index over static per-category JSON records
 * - Exact, transliteration and substring matching with stable tie-breaks
 * - Deterministic video reference synthesis for words the catalog lacks
 * - Fingerspelling of proper names, with optional start/end markers
 * - Repair of "spaced fingerspelling" input ("J O H N")
 * - Optional translation into the catalog language (LibreTranslate or
 *   Anthropic), with timeout, cancellation and pass-through on failure
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: Catalog entries, index, naming convention, loader, resolver
 * - `pipeline`: Normalizer, tokenizer/classifier, fingerspelling expander,
 *   playlist assembler, and the `SignPipeline` entry point
 * - `translation`: Translation service wrapper and cache
 * - `providers`: Client implementations for translation services
 * - `language_utils`: Language tag utilities
 * - `file_utils`: File system operations
 * - `app_controller`: Wiring used by the command line tool
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod catalog;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pipeline;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::{CatalogEntry, CatalogIndex, CatalogResolver, Transliteration, VideoNaming};
pub use errors::{CatalogError, ProviderError};
pub use pipeline::{SignDescriptor, SignPipeline, TranslationResult};
pub use translation::{TranslationCache, TranslationService};
