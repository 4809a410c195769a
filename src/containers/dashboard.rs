//! Admin dashboard container

use crate::containers::Collaborators;
use crate::core::{BillView, BilledError, Store};
use std::sync::Arc;

pub struct Dashboard {
    store: Option<Arc<dyn Store>>,
}

impl Dashboard {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            store: collaborators.store,
        }
    }

    /// Every bill, in backend order
    pub async fn get_bills_all_users(&self) -> Result<Vec<BillView>, BilledError> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let bills = store.bills().list().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list bills for dashboard");
            e
        })?;

        Ok(bills.iter().map(BillView::from).collect())
    }
}
