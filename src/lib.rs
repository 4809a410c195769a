//! # Billed
//!
//! Client-side core of the Billed expense-report tool.
//!
//! Employees list their expense bills and submit new ones with a receipt
//! image. This crate holds the behavior behind those pages:
//!
//! - **Bills list**: fetch, sort newest first, format dates and statuses,
//!   preview receipts
//! - **New bill**: receipt type check, draft creation on upload, submission
//!   of the completed bill
//! - **Views**: pure functions rendering each page to HTML
//! - **Router**: path → page mapping and navigation
//!
//! The remote store and the local storage are injected, so the same
//! containers run against the HTTP backend (`api` feature) or the in-memory
//! [`MockStore`](storage::MockStore) (`mock` feature).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! let storage = Arc::new(InMemoryLocalStorage::new());
//! User::employee("a@a").store(storage.as_ref())?;
//!
//! let document = Arc::new(Document::new());
//! let router = Router::new(document.clone(), Some(Arc::new(MockStore::with_fixtures())), storage);
//!
//! router.on_navigate(RoutePath::Bills).await?;
//! assert!(document.has_text("Mes notes de frais"));
//! ```

pub mod app;
pub mod config;
pub mod containers;
pub mod core;
pub mod storage;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Bill, BillStatus, BillUpdate, BillView, BilledError, BillsService, CreateBillRequest,
        CreatedBill, FormField, LocalStorage, NewBillForm, ReceiptFile, Store, StoreError,
        UpdateBillRequest, User, UserType, current_user,
    };

    // === Containers ===
    pub use crate::containers::{
        Bills, Collaborators, Dashboard, Draft, DraftState, FileChange, NewBill, SubmitOutcome,
    };

    // === App ===
    pub use crate::app::{
        ActivePage, Document, EyeIcon, Modal, Navigator, RecordingNavigator, RoutePath,
        RouteState, Router, render_route,
    };

    // === Views ===
    pub use crate::views::{
        BillsUiProps, DashboardUiProps, NewBillUiProps, bills_ui, dashboard_ui, new_bill_ui,
    };

    // === Storage ===
    pub use crate::storage::InMemoryLocalStorage;
    #[cfg(feature = "api")]
    pub use crate::storage::ApiStore;
    #[cfg(feature = "mock")]
    pub use crate::storage::{MockOperation, MockStore};

    // === Config ===
    pub use crate::config::{ApiConfig, BilledConfig, FormConfig, UiConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
