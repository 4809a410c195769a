//! The logged-in user, as persisted in local storage

use crate::core::error::BilledError;
use crate::core::service::LocalStorage;
use serde::{Deserialize, Serialize};

/// Local storage key holding the JSON user record
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: Some(email.into()),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Admin,
            email: Some(email.into()),
        }
    }

    /// Persist this user under [`USER_KEY`]
    pub fn store(&self, storage: &dyn LocalStorage) -> Result<(), BilledError> {
        let raw = serde_json::to_string(self).map_err(BilledError::InvalidUser)?;
        storage.set_item(USER_KEY, &raw);
        Ok(())
    }
}

/// Read the current user from local storage
pub fn current_user(storage: &dyn LocalStorage) -> Result<User, BilledError> {
    let raw = storage.get_item(USER_KEY).ok_or(BilledError::NoUser)?;
    serde_json::from_str(&raw).map_err(BilledError::InvalidUser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryLocalStorage;

    #[test]
    fn test_reads_user_without_email() {
        let storage = InMemoryLocalStorage::new();
        storage.set_item(USER_KEY, r#"{"type":"Employee"}"#);

        let user = current_user(&storage).unwrap();
        assert_eq!(user.user_type, UserType::Employee);
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_store_then_read() {
        let storage = InMemoryLocalStorage::new();
        User::admin("admin@test.tld").store(&storage).unwrap();

        let user = current_user(&storage).unwrap();
        assert_eq!(user, User::admin("admin@test.tld"));
    }

    #[test]
    fn test_missing_and_invalid_user() {
        let storage = InMemoryLocalStorage::new();
        assert!(matches!(current_user(&storage), Err(BilledError::NoUser)));

        storage.set_item(USER_KEY, "not json");
        assert!(matches!(current_user(&storage), Err(BilledError::InvalidUser(_))));
    }
}
