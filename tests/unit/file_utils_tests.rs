/*!
 * Tests for file utility functions
 */

use signflow::file_utils::FileManager;

use crate::common;

#[test]
fn test_findFiles_shouldFilterByExtensionAndSortByName() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.json", "{}")?;
    common::create_test_file(temp_dir.path(), "a.JSON", "{}")?;
    common::create_test_file(temp_dir.path(), "c.txt", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".json")?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().to_string()))
        .collect();

    assert_eq!(names, vec!["a.JSON", "b.json"]);
    Ok(())
}

#[test]
fn test_findFiles_withMissingDir_shouldFail() {
    assert!(FileManager::find_files("/definitely/not/here", "json").is_err());
}

#[test]
fn test_writeToFile_shouldCreateParents() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    FileManager::write_to_file(&path, "{}")?;

    assert!(FileManager::file_exists(&path));
    assert!(FileManager::dir_exists(temp_dir.path().join("nested")));
    assert_eq!(FileManager::read_to_string(&path)?, "{}");
    Ok(())
}
