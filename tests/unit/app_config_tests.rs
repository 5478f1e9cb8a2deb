/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use signflow::app_config::{Config, LogLevel, TranslationProvider};

#[test]
fn test_default_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.working_language, "english");
    assert_eq!(config.translation.provider, TranslationProvider::None);
    assert_eq!(config.text.min_substring_len, 2);
    assert!(config.text.synthesize_unknown);
    assert_eq!(config.text.name_start_marker.as_deref(), Some("name-start"));
}

#[test]
fn test_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "working_language": "en",
        "text": { "stop_words": ["the"] },
        "translation": { "provider": "libretranslate" },
        "log_level": "debug"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.text.stop_words, vec!["the"]);
    assert!(config.text.filler_words.contains(&"um".to_string()));
    assert_eq!(config.translation.provider, TranslationProvider::LibreTranslate);
    assert_eq!(config.translation.get_endpoint(), "https://libretranslate.com");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.catalog.cdn_host, "res.cloudinary.com");
}

#[test]
fn test_validate_withUnknownWorkingLanguage_shouldFail() {
    let mut config = Config::default();
    config.working_language = "not-a-language".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyCdnHost_shouldFail() {
    let mut config = Config::default();
    config.catalog.cdn_host = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_anthropicWithoutKey_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Anthropic;
    assert!(config.validate().is_err());

    config.translation.api_key = "key".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.translation.get_endpoint(), "https://api.anthropic.com");
}

#[test]
fn test_validate_providerWithZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::LibreTranslate;
    config.translation.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_translationProvider_fromStr_shouldAcceptAliases() {
    assert_eq!(TranslationProvider::from_str("libre").unwrap(), TranslationProvider::LibreTranslate);
    assert_eq!(TranslationProvider::from_str("Anthropic").unwrap(), TranslationProvider::Anthropic);
    assert!(TranslationProvider::from_str("carrier-pigeon").is_err());
}

#[test]
fn test_config_serializeRoundTrip_shouldKeepCustomEndpoint() {
    let mut config = Config::default();
    config.translation.endpoint = "http://localhost:5000".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.translation.get_endpoint(), "http://localhost:5000");
}
