/*!
 * Config to controller to result
 */

use signflow::app_config::Config;
use signflow::app_controller::{Controller, OutputFormat};
use signflow::pipeline::TranslationResult;

use crate::common;

fn config_for(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.catalog.data_dir = Some(dir.to_path_buf());
    config.catalog.cdn_host = "cdn.example.com".to_string();
    config.catalog.cloud_name = "demo".to_string();
    config
}

#[tokio::test]
async fn test_controller_withCatalogDir_shouldTranslate() -> anyhow::Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_catalog(temp_dir.path())?;

    let controller = Controller::with_config(config_for(temp_dir.path()))?;
    let result = controller.translate("Hello, the dog!", None).await;

    assert_eq!(
        result.playlist,
        vec![
            "https://x/hello.mp4".to_string(),
            "https://cdn.example.com/demo/video/upload/v1/dog.mp4".to_string(),
        ]
    );
    assert_eq!(result.skipped_words, vec!["the"]);
    Ok(())
}

#[test]
fn test_controller_categoryCounts_shouldFollowCatalogOrder() -> anyhow::Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_catalog(temp_dir.path())?;

    let controller = Controller::with_config(config_for(temp_dir.path()))?;

    assert_eq!(
        controller.category_counts(),
        vec![("greetings".to_string(), 2), ("animals".to_string(), 2)]
    );
    Ok(())
}

#[test]
fn test_controller_withMissingCatalogDir_shouldFail() {
    common::init_logger();
    let config = config_for(std::path::Path::new("/no/such/catalog"));
    assert!(Controller::with_config(config).is_err());
}

#[tokio::test]
async fn test_controller_withoutCatalog_shouldSynthesizeEverything() -> anyhow::Result<()> {
    common::init_logger();
    let controller = Controller::new_for_test()?;

    let result = controller.translate("hello", Some("en")).await;

    assert!(result.signs[0].synthesized);
    assert_eq!(
        result.playlist,
        vec!["https://res.cloudinary.com/signflow/video/upload/v1/hello.mp4"]
    );
    Ok(())
}

#[tokio::test]
async fn test_render_shouldSupportPlaylistAndJson() -> anyhow::Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_catalog(temp_dir.path())?;
    let controller = Controller::with_config(config_for(temp_dir.path()))?;

    let result = controller.translate("hello cat", None).await;

    assert_eq!(
        Controller::render(&result, OutputFormat::Playlist)?,
        "https://x/hello.mp4\nhttps://x/cat.mp4"
    );

    let json = Controller::render(&result, OutputFormat::Json)?;
    let parsed: TranslationResult = serde_json::from_str(&json)?;
    assert_eq!(parsed, result);
    assert!(json.contains("\"missingWords\""));
    Ok(())
}
