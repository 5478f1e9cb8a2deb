/*!
 * Translation in front of the text-to-sign pipeline
 */

use std::sync::Arc;
use std::time::Duration;

use signflow::catalog::{CatalogEntry, Transliteration};
use signflow::pipeline::{SignPipeline, TextRules};
use signflow::providers::mock::{MockRequest, MockTranslator};

use crate::common;

fn spanish_to_english(request: &MockRequest) -> String {
    request
        .text
        .split_whitespace()
        .map(|word| match word {
            "hola" => "hello",
            "gato" => "cat",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("hello", "https://x/hello.mp4")
            .with_transliteration("es", Transliteration::Single("hola".to_string())),
        CatalogEntry::new("cat", "https://x/cat.mp4"),
    ]
}

fn pipeline(mock: &MockTranslator, timeout_ms: u64) -> SignPipeline {
    common::pipeline_with_translator(
        catalog(),
        TextRules::default(),
        Arc::new(mock.clone()),
        Duration::from_millis(timeout_ms),
    )
}

#[tokio::test]
async fn test_translateToSigns_foreignText_shouldTranslateFirst() {
    let mock = MockTranslator::working().with_custom_response(spanish_to_english);
    let pipeline = pipeline(&mock, 500);

    let result = pipeline.translate_to_signs("hola gato", "es").await;

    assert_eq!(result.playlist, vec!["https://x/hello.mp4", "https://x/cat.mp4"]);
    assert_eq!(result.signs[0].word, "hello");
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_translateToSigns_providerFailure_shouldFallBackToOriginalText() {
    let mock = MockTranslator::failing();
    let pipeline = pipeline(&mock, 500);

    let result = pipeline.translate_to_signs("hola", "es").await;

    assert_eq!(result.signs.len(), 1);
    assert_eq!(result.signs[0].word, "hola");
    assert_eq!(result.playlist, vec!["https://x/hello.mp4"]);
}

#[tokio::test]
async fn test_translateToSigns_providerTimeout_shouldFallBackToOriginalText() {
    let mock = MockTranslator::slow(1_000).with_custom_response(spanish_to_english);
    let pipeline = pipeline(&mock, 20);

    let result = pipeline.translate_to_signs("hola", "es").await;

    assert_eq!(result.signs[0].word, "hola");
    assert!(result.signs[0].found);
}

#[tokio::test]
async fn test_translateToSignsUntil_cancelled_shouldUseOriginalText() {
    let mock = MockTranslator::slow(1_000).with_custom_response(spanish_to_english);
    let pipeline = pipeline(&mock, 5_000);

    let result = pipeline
        .translate_to_signs_until("hola gato", "es", tokio::time::sleep(Duration::from_millis(10)))
        .await;

    let words: Vec<&str> = result.signs.iter().map(|sign| sign.word.as_str()).collect();
    assert_eq!(words, vec!["hola", "gato"]);
    assert_eq!(result.signs[0].video_url.as_deref(), Some("https://x/hello.mp4"));
    assert!(result.signs[1].synthesized);
}

#[tokio::test]
async fn test_translateToSigns_workingLanguage_shouldNotCallProvider() {
    let mock = MockTranslator::working().with_custom_response(spanish_to_english);
    let pipeline = pipeline(&mock, 500);

    let result = pipeline.translate_to_signs("hello cat", "en").await;

    assert_eq!(result.playlist.len(), 2);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_translateToSigns_concurrentCalls_shouldShareIndex() {
    let mock = MockTranslator::working().with_custom_response(spanish_to_english);
    let pipeline = Arc::new(pipeline(&mock, 500));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { pipeline.translate_to_signs("hola gato", "es").await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.expect("task completes");
        assert_eq!(result.playlist, vec!["https://x/hello.mp4", "https://x/cat.mp4"]);
    }
}
