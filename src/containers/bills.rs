//! Bills list container

use crate::app::document::{Document, EyeIcon, Modal};
use crate::app::navigation::Navigator;
use crate::app::routes::RoutePath;
use crate::containers::Collaborators;
use crate::core::{BillView, BilledError, Store};
use std::sync::Arc;

pub struct Bills {
    document: Arc<Document>,
    on_navigate: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
}

impl Bills {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            document: collaborators.document,
            on_navigate: collaborators.on_navigate,
            store: collaborators.store,
        }
    }

    /// "Nouvelle note de frais" button
    pub async fn handle_click_new_bill(&self) {
        tracing::debug!("new bill requested from bills list");
        self.on_navigate.navigate(RoutePath::NewBill).await;
    }

    /// Eye icon of a row: preview the receipt in the modal
    pub fn handle_click_icon_eye(&self, icon: &EyeIcon) {
        tracing::debug!(bill_url = %icon.bill_url, "opening receipt preview");
        self.document.show_modal(Modal {
            file_url: icon.bill_url.clone(),
            image_width: self.document.ui().modal_image_width,
        });
    }

    /// Fetch the bills, newest first, formatted for display
    ///
    /// Ordering uses the raw ISO dates; formatting happens afterwards.
    pub async fn get_bills(&self) -> Result<Vec<BillView>, BilledError> {
        let Some(store) = &self.store else {
            tracing::debug!("no store injected, bills list is empty");
            return Ok(Vec::new());
        };

        let mut bills = store.bills().list().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list bills");
            e
        })?;

        bills.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(count = bills.len(), "bills fetched");

        Ok(bills.iter().map(BillView::from).collect())
    }
}
