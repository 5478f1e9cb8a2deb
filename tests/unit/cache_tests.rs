/*!
 * Tests for translation cache functionality
 */

use signflow::translation::TranslationCache;

#[test]
fn test_cache_new_withDisabled_shouldNotStore() {
    let cache = TranslationCache::new(false, 16);
    cache.store("hola", "es", "en", "hello");

    assert!(cache.get("hola", "es", "en").is_none());
    assert!(!cache.is_enabled());
    assert!(cache.is_empty());
}

#[test]
fn test_cache_new_withZeroCapacity_shouldBeDisabled() {
    let cache = TranslationCache::new(true, 0);
    assert!(!cache.is_enabled());
}

#[test]
fn test_cache_store_withEnabledCache_shouldStoreTranslation() {
    let cache = TranslationCache::new(true, 16);
    cache.store("hola", "es", "en", "hello");

    assert_eq!(cache.get("hola", "es", "en"), Some("hello".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_get_withDifferentLanguages_shouldReturnNone() {
    let cache = TranslationCache::new(true, 16);
    cache.store("hola", "es", "en", "hello");

    assert!(cache.get("hola", "pt", "en").is_none());
    assert!(cache.get("hola", "es", "fr").is_none());
}

#[test]
fn test_cache_get_languageTagCase_shouldBeIgnored() {
    let cache = TranslationCache::new(true, 16);
    cache.store("hola", "ES", "En", "hello");

    assert_eq!(cache.get("hola", "es", "en"), Some("hello".to_string()));
}

#[test]
fn test_cache_store_overCapacity_shouldEvictOldest() {
    let cache = TranslationCache::new(true, 2);
    cache.store("uno", "es", "en", "one");
    cache.store("dos", "es", "en", "two");
    cache.store("tres", "es", "en", "three");

    assert_eq!(cache.len(), 2);
    assert!(cache.get("uno", "es", "en").is_none());
    assert_eq!(cache.get("tres", "es", "en"), Some("three".to_string()));
}

#[test]
fn test_cache_stats_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new(true, 16);
    cache.store("hola", "es", "en", "hello");

    let _ = cache.get("hola", "es", "en");
    let _ = cache.get("adios", "es", "en");

    let (hits, misses, rate) = cache.stats();
    assert_eq!((hits, misses), (1, 1));
    assert!((rate - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache = TranslationCache::new(true, 16);
    let clone = cache.clone();
    clone.store("hola", "es", "en", "hello");

    assert_eq!(cache.get("hola", "es", "en"), Some("hello".to_string()));

    cache.clear();
    assert!(clone.is_empty());
}
