//! In-memory implementation of LocalStorage for testing and development

use crate::core::LocalStorage;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory key-value storage
///
/// Clones share the same map, like every script of a page sharing one
/// `localStorage`.
#[derive(Clone, Debug)]
pub struct InMemoryLocalStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryLocalStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage for InMemoryLocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear(&self) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = InMemoryLocalStorage::new();
        assert_eq!(storage.get_item("user"), None);

        storage.set_item("user", r#"{"type":"Employee"}"#);
        assert_eq!(storage.get_item("user").as_deref(), Some(r#"{"type":"Employee"}"#));

        storage.remove_item("user");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = InMemoryLocalStorage::new();
        let other = storage.clone();

        other.set_item("jwt", "token");
        assert_eq!(storage.get_item("jwt").as_deref(), Some("token"));

        storage.clear();
        assert_eq!(other.len(), 0);
    }
}
