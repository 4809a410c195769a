//! Integration tests for loading the client configuration

#![cfg(feature = "mock")]

use billed::prelude::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = BilledConfig::default();

    assert_eq!(config.api.base_url, "http://localhost:5678");
    assert_eq!(config.api.token_key, "jwt");
    assert_eq!(config.ui.layout_height, 120);
    assert_eq!(config.ui.modal_image_width, 400);
    assert_eq!(config.form.default_pct, 20);
}

#[test]
fn test_load_partial_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
api:
  base_url: https://billed.example.com
ui:
  modal_image_width: 640
"#
    )
    .unwrap();

    let config = BilledConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.api.base_url, "https://billed.example.com");
    assert_eq!(config.api.token_key, "jwt");
    assert_eq!(config.ui.modal_image_width, 640);
    assert_eq!(config.ui.layout_height, 120);
    assert_eq!(config.form, FormConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(BilledConfig::from_yaml_file("/nonexistent/billed.yaml").is_err());
}

#[tokio::test]
async fn test_configured_modal_width_is_used() {
    let config = BilledConfig::from_yaml_str("ui:\n  modal_image_width: 640\n").unwrap();
    let storage = Arc::new(InMemoryLocalStorage::new());
    User::employee("a@a").store(storage.as_ref()).unwrap();
    let document = Arc::new(Document::with_ui(config.ui));
    let router = Router::new(
        document.clone(),
        Some(Arc::new(MockStore::with_fixtures())),
        storage,
    );

    router.on_navigate(RoutePath::Bills).await.unwrap();
    let icon = document.eye_icons().remove(0);
    router.bills_page().unwrap().handle_click_icon_eye(&icon);

    assert_eq!(document.modal().unwrap().image_width, 640);
}
