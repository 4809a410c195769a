//! Shared test harness for page-level tests
//!
//! Provides an employee session in local storage, a page document and the
//! collaborators bundle the containers are built from.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod support;
//! use support::*;
//! ```

#![allow(dead_code)]

use billed::prelude::*;

pub const EMPLOYEE_EMAIL: &str = "a@a";

/// Local storage holding a logged-in employee
pub fn employee_storage() -> Arc<InMemoryLocalStorage> {
    let storage = Arc::new(InMemoryLocalStorage::new());
    User::employee(EMPLOYEE_EMAIL)
        .store(storage.as_ref())
        .expect("user serializes");
    storage
}

/// Everything a page test needs, with the handles kept concrete
pub struct Page {
    pub document: Arc<Document>,
    pub navigator: Arc<RecordingNavigator>,
    pub store: MockStore,
    pub storage: Arc<InMemoryLocalStorage>,
}

impl Page {
    /// Page backed by the fixture bills; navigation is recorded only
    pub fn new() -> Self {
        Self::with_store(MockStore::with_fixtures())
    }

    pub fn with_store(store: MockStore) -> Self {
        Self {
            document: Arc::new(Document::new()),
            navigator: Arc::new(RecordingNavigator::new()),
            store,
            storage: employee_storage(),
        }
    }

    /// Navigation also renders the static page of the target route
    pub fn rendering(mut self) -> Self {
        self.navigator = Arc::new(RecordingNavigator::rendering(self.document.clone()));
        self
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            document: self.document.clone(),
            on_navigate: self.navigator.clone(),
            store: Some(Arc::new(self.store.clone())),
            local_storage: self.storage.clone(),
        }
    }

    /// Same collaborators with no store injected
    pub fn collaborators_without_store(&self) -> Collaborators {
        Collaborators {
            store: None,
            ..self.collaborators()
        }
    }
}

/// Router over a mock store with an employee logged in
pub fn router_with(store: MockStore) -> Router {
    Router::new(
        Arc::new(Document::new()),
        Some(Arc::new(store)),
        employee_storage(),
    )
}

pub fn jpg_receipt() -> ReceiptFile {
    ReceiptFile::new(vec![0xFF, 0xD8, 0xFF], "receipt.jpg", "image/jpeg")
}

pub fn pdf_receipt() -> ReceiptFile {
    ReceiptFile::new(b"%PDF-1.4".to_vec(), "receipt.pdf", "application/pdf")
}

/// Fill every field of the new bill form with valid values
pub fn fill_form(new_bill: &NewBill) {
    new_bill.set_field(FormField::ExpenseType, "Transports");
    new_bill.set_field(FormField::Name, "Vol Paris Londres");
    new_bill.set_field(FormField::Date, "2022-05-12");
    new_bill.set_field(FormField::Amount, "348");
    new_bill.set_field(FormField::Vat, "70");
    new_bill.set_field(FormField::Pct, "20");
    new_bill.set_field(FormField::Commentary, "Séminaire");
}
