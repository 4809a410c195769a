//! Page containers: the behavior behind the bills list, the new bill form
//! and the admin dashboard

pub mod bills;
pub mod dashboard;
pub mod new_bill;

pub use bills::Bills;
pub use dashboard::Dashboard;
pub use new_bill::{Draft, DraftState, FileChange, NewBill, SubmitOutcome};

use crate::app::document::Document;
use crate::app::navigation::Navigator;
use crate::core::{LocalStorage, Store};
use std::sync::Arc;

/// Collaborators injected into every container
///
/// `store` is optional: a page built without one renders and navigates but
/// never reaches the backend.
#[derive(Clone)]
pub struct Collaborators {
    pub document: Arc<Document>,
    pub on_navigate: Arc<dyn Navigator>,
    pub store: Option<Arc<dyn Store>>,
    pub local_storage: Arc<dyn LocalStorage>,
}
