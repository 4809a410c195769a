//! Navigation between pages

use crate::app::document::Document;
use crate::app::routes::{RoutePath, RouteState, render_route};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Global navigation function handed to the containers
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, path: RoutePath);
}

/// Navigator that records every requested path
///
/// When built with [`RecordingNavigator::rendering`] it also writes the
/// static page of the route into a document, without fetching any data.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<RoutePath>>,
    document: Option<Arc<Document>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendering(document: Arc<Document>) -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
            document: Some(document),
        }
    }

    /// Paths navigated to so far, oldest first
    pub fn paths(&self) -> Vec<RoutePath> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn was_called(&self) -> bool {
        !self.paths().is_empty()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, path: RoutePath) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path);

        let Some(document) = &self.document else {
            return;
        };

        document.push_location(path);
        match render_route(path, &RouteState::default()) {
            Ok(html) => document.set_body(html),
            Err(e) => tracing::error!(route = %path, error = %e, "failed to render route"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_paths() {
        let navigator = RecordingNavigator::new();
        assert!(!navigator.was_called());

        navigator.navigate(RoutePath::NewBill).await;
        navigator.navigate(RoutePath::Bills).await;

        assert_eq!(navigator.paths(), vec![RoutePath::NewBill, RoutePath::Bills]);
    }

    #[tokio::test]
    async fn test_rendering_writes_page() {
        let document = Arc::new(Document::new());
        let navigator = RecordingNavigator::rendering(document.clone());

        navigator.navigate(RoutePath::NewBill).await;

        assert!(document.has_text("Envoyer une note de frais"));
        assert_eq!(document.location(), Some(RoutePath::NewBill));
    }
}
