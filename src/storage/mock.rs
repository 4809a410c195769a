//! In-memory implementation of Store for testing and development
//!
//! `MockStore` keeps bills in insertion order, records every call it gets and
//! can be told to reject the next call of a given operation, which is how the
//! error pages are exercised.

use crate::core::{
    Bill, BillsService, CreateBillRequest, CreatedBill, Store, StoreError, UpdateBillRequest,
};
use crate::storage::fixtures;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use uuid::Uuid;

/// Base URL of the receipts "uploaded" to the mock store
pub const MOCK_FILE_BASE_URL: &str = "https://localhost:3456/images";

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    List,
    Create,
    Update,
}

/// Every call received by a [`MockStore`], in order per operation
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    pub list: usize,
    pub create: Vec<CreateBillRequest>,
    pub update: Vec<UpdateBillRequest>,
}

struct MockBills {
    bills: RwLock<Vec<Bill>>,
    failures: Mutex<HashMap<MockOperation, VecDeque<StoreError>>>,
    calls: RwLock<CallLog>,
}

impl MockBills {
    fn next_failure(&self, operation: MockOperation) -> Option<StoreError> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
    }
}

/// In-memory store
///
/// Clones share the same bills and call log.
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<MockBills>,
}

impl MockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_bills(Vec::new())
    }

    /// Create a store seeded with the fixture bills
    pub fn with_fixtures() -> Self {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            inner: Arc::new(MockBills {
                bills: RwLock::new(bills),
                failures: Mutex::new(HashMap::new()),
                calls: RwLock::new(CallLog::default()),
            }),
        }
    }

    /// Reject the next call of `operation` with `error`
    ///
    /// Failures queue up; each one is consumed by a single call.
    pub fn fail_next(&self, operation: MockOperation, error: StoreError) {
        self.inner
            .failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Snapshot of the calls received so far
    pub fn calls(&self) -> CallLog {
        self.inner
            .calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the stored bills
    pub fn stored_bills(&self) -> Vec<Bill> {
        self.inner
            .bills
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MockStore {
    fn bills(&self) -> Arc<dyn BillsService> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl BillsService for MockStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.inner
            .calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .list += 1;

        if let Some(err) = self.inner.next_failure(MockOperation::List) {
            return Err(err);
        }

        Ok(self.stored_bills())
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError> {
        self.inner
            .calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .create
            .push(request.clone());

        if let Some(err) = self.inner.next_failure(MockOperation::Create) {
            return Err(err);
        }

        let key = Uuid::new_v4().simple().to_string();
        let file_name = request.data.file.name;
        let file_url = format!("{}/{}", MOCK_FILE_BASE_URL, file_name);

        self.inner
            .bills
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Bill::draft(
                key.clone(),
                request.data.email,
                file_url.clone(),
                file_name.clone(),
            ));

        Ok(CreatedBill {
            file_url,
            file_name: Some(file_name),
            key,
        })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError> {
        self.inner
            .calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .update
            .push(request.clone());

        if let Some(err) = self.inner.next_failure(MockOperation::Update) {
            return Err(err);
        }

        let mut bills = self
            .inner
            .bills
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let bill = bills
            .iter_mut()
            .find(|bill| bill.id == request.selector)
            .ok_or_else(|| StoreError::UnknownSelector {
                selector: request.selector.clone(),
            })?;

        bill.apply(&request.data);

        Ok(bill.clone())
    }
}
