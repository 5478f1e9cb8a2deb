/*!
 * Tests for language tag utilities
 */

use signflow::language_utils::{get_language_name, normalize_language_tag, same_language, service_code};

#[test]
fn test_normalizeLanguageTag_withIso6391_shouldReturnIso6393() {
    assert_eq!(normalize_language_tag("en").unwrap(), "eng");
    assert_eq!(normalize_language_tag("fr").unwrap(), "fra");
}

#[test]
fn test_normalizeLanguageTag_withEnglishName_shouldReturnIso6393() {
    assert_eq!(normalize_language_tag("english").unwrap(), "eng");
    assert_eq!(normalize_language_tag("French").unwrap(), "fra");
}

#[test]
fn test_normalizeLanguageTag_withPart2b_shouldMapToPart2t() {
    assert_eq!(normalize_language_tag("fre").unwrap(), "fra");
}

#[test]
fn test_normalizeLanguageTag_withUnknownTag_shouldFail() {
    assert!(normalize_language_tag("klingonese").is_err());
}

#[test]
fn test_sameLanguage_acrossForms_shouldMatch() {
    assert!(same_language("en", "english"));
    assert!(same_language("eng", "EN"));
    assert!(!same_language("en", "fr"));
}

#[test]
fn test_sameLanguage_withUnknownTags_shouldCompareText() {
    assert!(same_language("x-sign", "X-SIGN"));
    assert!(!same_language("x-sign", "english"));
}

#[test]
fn test_getLanguageName_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("english").unwrap(), "English");
}

#[test]
fn test_serviceCode_shouldPreferShortForm() {
    assert_eq!(service_code("english").unwrap(), "en");
    assert_eq!(service_code("fra").unwrap(), "fr");
}
