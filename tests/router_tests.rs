//! Router and dashboard tests

#![cfg(feature = "mock")]

mod support;

use billed::prelude::*;
use support::*;

#[tokio::test]
async fn test_navigation_updates_location_and_history() {
    let router = router_with(MockStore::with_fixtures());

    router.on_navigate(RoutePath::Bills).await.unwrap();
    router.on_navigate(RoutePath::NewBill).await.unwrap();

    let document = router.document();
    assert_eq!(document.location(), Some(RoutePath::NewBill));
    assert_eq!(document.history(), vec![RoutePath::Bills, RoutePath::NewBill]);
    assert!(router.bills_page().is_none());
    assert!(router.new_bill_page().is_some());
}

#[tokio::test]
async fn test_raw_path_navigation() {
    let router = router_with(MockStore::with_fixtures());

    router.on_navigate_path("#employee/bills").await.unwrap();

    assert!(router.document().has_text("Mes notes de frais"));
}

#[tokio::test]
async fn test_unknown_path_renders_error_page() {
    let router = router_with(MockStore::with_fixtures());
    router.on_navigate(RoutePath::Bills).await.unwrap();

    router.on_navigate_path("#employee/unknown").await.unwrap();

    let document = router.document();
    assert!(document.has_text("Page introuvable"));
    assert!(router.active_page().is_none());
    assert_eq!(document.location(), Some(RoutePath::Bills));
}

#[tokio::test]
async fn test_navigation_closes_modal() {
    let router = router_with(MockStore::with_fixtures());
    router.on_navigate(RoutePath::Bills).await.unwrap();
    let icon = router.document().eye_icons().remove(0);
    router.bills_page().unwrap().handle_click_icon_eye(&icon);
    assert!(router.document().is_modal_shown());

    router.on_navigate(RoutePath::NewBill).await.unwrap();

    assert!(!router.document().is_modal_shown());
}

#[tokio::test]
async fn test_router_navigator_from_container() {
    let router = router_with(MockStore::with_fixtures());
    router.on_navigate(RoutePath::Bills).await.unwrap();

    router.bills_page().unwrap().handle_click_new_bill().await;

    assert_eq!(router.document().location(), Some(RoutePath::NewBill));
    assert!(router.document().has_test_id("form-new-bill"));
}

#[tokio::test]
async fn test_navigator_is_inert_after_router_drop() {
    let document = Arc::new(Document::new());
    let router = Router::new(
        document.clone(),
        Some(Arc::new(MockStore::with_fixtures())),
        employee_storage(),
    );
    let navigator = router.navigator();
    drop(router);

    navigator.navigate(RoutePath::Bills).await;

    assert_eq!(document.location(), None);
}

#[tokio::test]
async fn test_configured_layout_height_is_rendered() {
    let ui = UiConfig {
        layout_height: 95,
        ..UiConfig::default()
    };
    let document = Arc::new(Document::with_ui(ui));
    let router = Router::new(
        document.clone(),
        Some(Arc::new(MockStore::with_fixtures())),
        employee_storage(),
    );

    router.on_navigate(RoutePath::Bills).await.unwrap();

    assert!(document.body().contains("height: 95vh;"));
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_groups_bills_by_status() {
    let router = router_with(MockStore::with_fixtures());

    router.on_navigate(RoutePath::Dashboard).await.unwrap();

    let document = router.document();
    assert!(document.has_text("Validations"));
    assert!(document.has_text("En attente (1)"));
    assert!(document.has_text("Validé (1)"));
    assert!(document.has_text("Refusé (2)"));
    assert!(router.dashboard_page().is_some());
}

#[tokio::test]
async fn test_dashboard_keeps_backend_order() {
    let page = Page::new();

    let rows = Dashboard::new(page.collaborators())
        .get_bills_all_users()
        .await
        .unwrap();

    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["encore", "test1", "test3", "test2"]);
}

#[tokio::test]
async fn test_dashboard_fetch_failing_with_500_shows_error_page() {
    let store = MockStore::with_fixtures();
    store.fail_next(MockOperation::List, StoreError::Http { status: 500 });
    let router = router_with(store);

    router.on_navigate(RoutePath::Dashboard).await.unwrap();

    assert!(router.document().has_text("Erreur 500"));
    assert!(!router.document().has_text("Validations"));
}
