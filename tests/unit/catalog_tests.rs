/*!
 * Tests for catalog loading, indexing and resolution
 */

use std::path::Path;

use signflow::catalog::loader::{load_catalog_dir, load_catalog_str};
use signflow::catalog::{CatalogEntry, CatalogIndex, CatalogResolver, MatchKind, Transliteration};
use signflow::errors::CatalogError;

use crate::common;

#[test]
fn test_loadCatalogDir_shouldReadJsonFilesInNameOrder() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_catalog(temp_dir.path())?;

    let entries = load_catalog_dir(temp_dir.path())?;
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();

    assert_eq!(words, vec!["hello", "goodbye", "cat", "dog", ""]);
    assert_eq!(entries[0].category, "greetings");
    assert_eq!(entries[2].category, "animals");
    Ok(())
}

#[test]
fn test_loadCatalogStr_withMalformedJson_shouldReportFile() {
    let result = load_catalog_str("{ not json", Path::new("broken.json"));

    match result {
        Err(CatalogError::Parse { path, .. }) => assert_eq!(path, Path::new("broken.json")),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_loadCatalogStr_entryCategory_shouldWinOverRecord() {
    let json = r#"{ "category": "food", "signs": [ { "word": "apple", "category": "fruit" }, { "word": "bread" } ] }"#;
    let entries = load_catalog_str(json, Path::new("food.json")).unwrap();

    assert_eq!(entries[0].category, "fruit");
    assert_eq!(entries[1].category, "food");
}

#[test]
fn test_loadCatalogDir_withMissingDir_shouldFail() {
    assert!(matches!(
        load_catalog_dir(Path::new("/no/such/catalog")),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn test_loadCatalogDir_withUnreadableRecord_shouldReportIoError() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    std::fs::write(temp_dir.path().join("broken.json"), [0xff, 0xfe, 0x00])?;

    let error = load_catalog_dir(temp_dir.path()).unwrap_err();
    match error {
        CatalogError::Io { path, message } => {
            assert!(path.ends_with("broken.json"));
            assert!(message.contains("Failed to read file"));
        }
        other => panic!("expected an I/O error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_build_fromLoadedCatalog_shouldRepairAndDrop() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_catalog(temp_dir.path())?;

    let index = CatalogIndex::build(load_catalog_dir(temp_dir.path())?, common::test_naming());

    assert_eq!(index.len(), 4);
    let dog = index.get("dog").expect("dog is indexed");
    assert_eq!(dog.video_url, "https://cdn.example.com/demo/video/upload/v1/dog.mp4");
    assert_eq!(dog.thumbnail_url, "https://cdn.example.com/demo/image/upload/v2/thumbnails/dog.jpg");
    assert_eq!(dog.sign_id, "dog");
    assert_eq!(index.categories(), vec!["greetings", "animals"]);
    assert_eq!(index.by_category("greetings").count(), 2);
    Ok(())
}

#[test]
fn test_get_byTransliteration_shouldFindEntry() {
    let index = common::index_from(vec![
        CatalogEntry::new("goodbye", "u_bye")
            .with_transliteration("es", Transliteration::Multiple(vec!["Adios".into(), "chao".into()])),
    ]);

    assert_eq!(index.get("ADIOS").map(|e| e.word.as_str()), Some("goodbye"));
    assert_eq!(index.get("chao").map(|e| e.word.as_str()), Some("goodbye"));
    assert!(index.get("hasta").is_none());
}

#[test]
fn test_resolve_substring_shouldPreferEarliestEntry() {
    let index = common::index_from(vec![
        CatalogEntry::new("water", "u_water"),
        CatalogEntry::new("waterfall", "u_waterfall"),
    ]);
    let resolver = CatalogResolver::new(&index, 3);

    let resolution = resolver.resolve("waterfalls").unwrap();
    assert_eq!(resolution.kind, MatchKind::Substring);
    assert_eq!(resolution.video_url, "u_water");
}

#[test]
fn test_resolve_unknownWord_shouldSynthesizeDeterministically() {
    let index = common::index_from(vec![CatalogEntry::new("cat", "u_cat")]);
    let resolver = CatalogResolver::new(&index, 3);

    let first = resolver.resolve("zzzzz").unwrap();
    let second = resolver.resolve("zzzzz").unwrap();

    assert!(first.is_synthesized());
    assert_eq!(first.video_url, second.video_url);
    assert_eq!(first.video_url, "https://cdn.example.com/demo/video/upload/v1/zzzzz.mp4");
    assert_eq!(first.entry.category, "generated");
}

#[test]
fn test_findInCatalog_unknownWord_shouldNotSynthesize() {
    let index = common::index_from(vec![CatalogEntry::new("cat", "u_cat")]);
    let resolver = CatalogResolver::new(&index, 3);

    assert!(resolver.find_in_catalog("zzzzz").is_none());
    assert!(resolver.find_in_catalog("CAT").is_some());
}

#[test]
fn test_exact_shouldIgnoreSubstrings() {
    let index = common::index_from(vec![CatalogEntry::new("name-start", "u_start")]);
    let resolver = CatalogResolver::new(&index, 3);

    assert!(resolver.exact("name-start").is_some());
    assert!(resolver.exact("name").is_none());
}
