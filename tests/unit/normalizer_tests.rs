/*!
 * Tests for language normalization
 */

use std::sync::Arc;
use std::time::Duration;

use signflow::pipeline::normalizer::{is_spaced_fingerspelling, merge_letter_runs, remove_fillers};
use signflow::pipeline::{LanguageNormalizer, TextRules};
use signflow::providers::mock::{MockRequest, MockTranslator};
use signflow::translation::{TranslationCache, TranslationService};

fn to_english(request: &MockRequest) -> String {
    match request.text.as_str() {
        "J O H N" => "J O H N".to_string(),
        "hola um amigo" => "hello um friend".to_string(),
        other => other.to_string(),
    }
}

fn normalizer(mock: MockTranslator) -> LanguageNormalizer {
    crate::common::init_logger();
    LanguageNormalizer::new(TranslationService::new(
        Arc::new(mock),
        "english",
        Duration::from_millis(500),
        TranslationCache::default(),
    ))
}

#[test]
fn test_isSpacedFingerspelling_shouldRequireMajorityOfLetters() {
    assert!(is_spaced_fingerspelling("X Y"));
    assert!(is_spaced_fingerspelling("my name is J O H N"));
    assert!(!is_spaced_fingerspelling("I am here"));
    assert!(!is_spaced_fingerspelling("a"));
}

#[test]
fn test_mergeLetterRuns_shouldKeepLongerTokens() {
    assert_eq!(merge_letter_runs("hi J O H N and A L"), "hi JOHN and AL");
    assert_eq!(merge_letter_runs("X Y"), "XY");
}

#[test]
fn test_removeFillers_shouldKeepOtherTokensAndStripElided() {
    let rules = TextRules::default();
    let (text, elided) = remove_fillers("Um, hello uh World!", &rules);

    assert_eq!(text, "hello World!");
    assert_eq!(elided, vec!["Um", "uh"]);
}

#[test]
fn test_removeFillers_withCustomList_shouldOnlyDropConfiguredWords() {
    let rules = TextRules::default().with_filler_words(["like"]);
    let (text, elided) = remove_fillers("um it was, like, huge", &rules);

    assert_eq!(text, "um it was, huge");
    assert_eq!(elided, vec!["like"]);
}

#[tokio::test]
async fn test_normalize_foreignText_shouldTranslateThenDropFillers() {
    let normalizer = normalizer(MockTranslator::working().with_custom_response(to_english));

    let normalized = normalizer.normalize("hola um amigo", "es", &TextRules::default()).await;

    assert_eq!(normalized.text, "hello friend");
    assert_eq!(normalized.elided, vec!["um"]);
    assert!(!normalized.fingerspelled);
}

#[tokio::test]
async fn test_normalize_spacedLetters_shouldMergeAfterTranslation() {
    let normalizer = normalizer(MockTranslator::working().with_custom_response(to_english));

    let normalized = normalizer.normalize("J O H N", "es", &TextRules::default()).await;

    assert!(normalized.fingerspelled);
    assert_eq!(normalized.text, "JOHN");
}

#[tokio::test]
async fn test_normalize_failingTranslation_shouldUseOriginal() {
    let mock = MockTranslator::failing();
    let normalizer = normalizer(mock.clone());

    let normalized = normalizer.normalize("hola amigo", "es", &TextRules::default()).await;

    assert_eq!(normalized.text, "hola amigo");
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_normalize_workingLanguage_shouldSkipProvider() {
    let mock = MockTranslator::working();
    let normalizer = normalizer(mock.clone());

    let normalized = normalizer.normalize("hello there", "en", &TextRules::default()).await;

    assert_eq!(normalized.text, "hello there");
    assert_eq!(mock.request_count(), 0);
}
