//! Collaborator traits injected into the containers

use crate::core::bill::{Bill, CreateBillRequest, CreatedBill, UpdateBillRequest};
use crate::core::error::StoreError;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote `bills` resource
///
/// Implementations talk to the Billed backend or keep bills in memory.
/// The containers are agnostic to which one they get.
#[async_trait]
pub trait BillsService: Send + Sync {
    /// List the bills visible to the current user
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt, creating a draft bill
    ///
    /// The returned `key` is the selector to use for the later update.
    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError>;

    /// Complete the draft identified by `request.selector`
    async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError>;
}

/// Remote store entry point
pub trait Store: Send + Sync {
    fn bills(&self) -> Arc<dyn BillsService>;
}

/// Synchronous key-value storage (the browser's `localStorage`)
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str);

    fn remove_item(&self, key: &str);

    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bill::BillStatus;

    struct EmptyBills;

    #[async_trait]
    impl BillsService for EmptyBills {
        async fn list(&self) -> Result<Vec<Bill>, StoreError> {
            Ok(Vec::new())
        }

        async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError> {
            Ok(CreatedBill {
                file_url: format!("memory://{}", request.data.file.name),
                file_name: Some(request.data.file.name),
                key: "k".to_string(),
            })
        }

        async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError> {
            Err(StoreError::UnknownSelector {
                selector: request.selector,
            })
        }
    }

    struct EmptyStore;

    impl Store for EmptyStore {
        fn bills(&self) -> Arc<dyn BillsService> {
            Arc::new(EmptyBills)
        }
    }

    // The traits can be used behind trait objects
    #[tokio::test]
    async fn test_store_as_trait_object() {
        let store: Arc<dyn Store> = Arc::new(EmptyStore);
        assert!(store.bills().list().await.unwrap().is_empty());

        let err = store
            .bills()
            .update(UpdateBillRequest {
                data: crate::core::bill::BillUpdate {
                    email: None,
                    expense_type: "Transports".into(),
                    name: String::new(),
                    amount: 1.0,
                    date: "2021-09-01".into(),
                    vat: String::new(),
                    pct: 20,
                    commentary: String::new(),
                    file_url: String::new(),
                    file_name: String::new(),
                    status: BillStatus::Pending,
                },
                selector: "missing".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "STORE_UNKNOWN_SELECTOR");
    }
}
