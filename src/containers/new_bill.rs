//! New bill container
//!
//! A bill is built in two steps. Picking a valid receipt immediately creates
//! a draft bill remotely; submitting the form completes that draft through
//! an update keyed by the selector the create call returned.
//!
//! ```text
//! Empty ──invalid file──▶ FileRejected ──valid file──▶ DraftCreated ──submit──▶ Submitted
//!   └──────────────────────valid file─────────────────────┘
//! ```

use crate::app::document::Document;
use crate::app::navigation::Navigator;
use crate::app::routes::RoutePath;
use crate::config::FormConfig;
use crate::containers::Collaborators;
use crate::core::{
    BilledError, CreateBillRequest, FormField, LocalStorage, NewBillForm, RECEIPT_TYPE_ERROR,
    ReceiptFile, ReceiptUpload, RequestHeaders, Store, UpdateBillRequest, current_user,
};
use crate::views::{NewBillUiProps, new_bill_ui};
use std::sync::{Arc, Mutex, PoisonError};
use validator::{Validate, ValidationErrors};

/// A draft bill created by a receipt upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Identifier to pass to the update call
    pub selector: String,
    pub file_url: String,
    pub file_name: String,
}

/// Progress of the bill being created
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Empty,
    /// Last picked file was not an accepted image
    FileRejected,
    DraftCreated(Draft),
    /// Submitted at least once; a new submit updates the same draft again
    Submitted(Draft),
}

impl DraftState {
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DraftState::DraftCreated(draft) | DraftState::Submitted(draft) => Some(draft),
            DraftState::Empty | DraftState::FileRejected => None,
        }
    }
}

/// Result of picking a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// Not an accepted image; the inline error is shown
    Rejected,
    /// Accepted, but no store to upload to
    Selected,
    /// Accepted and uploaded as a draft
    Uploaded(Draft),
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form constraints failed; the submit handler did not run
    Blocked(ValidationErrors),
    Submitted,
}

#[derive(Debug, Default)]
struct NewBillState {
    form: NewBillForm,
    file_error: String,
    draft: DraftState,
}

pub struct NewBill {
    document: Arc<Document>,
    on_navigate: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
    local_storage: Arc<dyn LocalStorage>,
    default_pct: u32,
    state: Mutex<NewBillState>,
}

impl NewBill {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            document: collaborators.document,
            on_navigate: collaborators.on_navigate,
            store: collaborators.store,
            local_storage: collaborators.local_storage,
            default_pct: FormConfig::default().default_pct,
            state: Mutex::new(NewBillState::default()),
        }
    }

    pub fn with_form_config(mut self, config: &FormConfig) -> Self {
        self.default_pct = config.default_pct;
        self
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut NewBillState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Current form values
    pub fn form(&self) -> NewBillForm {
        self.with_state(|state| state.form.clone())
    }

    /// Inline error shown under the file input
    pub fn file_error(&self) -> String {
        self.with_state(|state| state.file_error.clone())
    }

    pub fn draft_state(&self) -> DraftState {
        self.with_state(|state| state.draft.clone())
    }

    /// Type into a form input
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.with_state(|state| state.form.set(field, value));
    }

    fn render(&self) {
        let props = self.with_state(|state| NewBillUiProps {
            form: state.form.clone(),
            file_error: state.file_error.clone(),
            layout_height: self.document.ui().layout_height,
        });

        match new_bill_ui(&props) {
            Ok(html) => self.document.set_body(html),
            Err(e) => tracing::error!(error = %e, "failed to render new bill form"),
        }
    }

    /// File input change: check the type, then upload the receipt as a draft
    pub async fn handle_change_file(&self, file: ReceiptFile) -> Result<FileChange, BilledError> {
        if !file.is_allowed_image() {
            tracing::warn!(file_name = %file.name, mime_type = %file.mime_type, "rejected receipt type");
            self.with_state(|state| {
                state.form.file = None;
                state.file_error = RECEIPT_TYPE_ERROR.to_string();
                state.draft = DraftState::FileRejected;
            });
            self.render();
            return Ok(FileChange::Rejected);
        }

        // the previous draft belongs to another receipt
        self.with_state(|state| {
            state.form.file = Some(file.clone());
            state.file_error.clear();
            state.draft = DraftState::Empty;
        });
        self.render();

        let Some(store) = &self.store else {
            tracing::debug!(file_name = %file.name, "no store injected, receipt kept locally");
            return Ok(FileChange::Selected);
        };

        let email = current_user(self.local_storage.as_ref())?.email;
        let file_name = file.name.clone();
        let request = CreateBillRequest {
            data: ReceiptUpload { file, email },
            headers: RequestHeaders {
                no_content_type: true,
            },
        };

        let created = store.bills().create(request).await.map_err(|e| {
            tracing::error!(file_name = %file_name, error = %e, "receipt upload failed");
            e
        })?;

        let draft = Draft {
            selector: created.key,
            file_url: created.file_url,
            file_name: created.file_name.unwrap_or(file_name),
        };
        tracing::info!(selector = %draft.selector, "draft bill created");

        self.with_state(|state| state.draft = DraftState::DraftCreated(draft.clone()));
        Ok(FileChange::Uploaded(draft))
    }

    /// Form submit event: the handler only runs when the form constraints hold
    pub async fn submit_form(&self) -> Result<SubmitOutcome, BilledError> {
        if let Err(errors) = self.form().validate() {
            let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
            tracing::debug!(?fields, "form constraints failed");
            return Ok(SubmitOutcome::Blocked(errors));
        }

        self.handle_submit().await?;
        Ok(SubmitOutcome::Submitted)
    }

    /// Complete the draft with the form values, then go back to the list
    pub async fn handle_submit(&self) -> Result<(), BilledError> {
        let (form, draft) = self.with_state(|state| (state.form.clone(), state.draft.clone()));

        let Some(store) = &self.store else {
            tracing::debug!("no store injected, skipping bill update");
            self.on_navigate.navigate(RoutePath::Bills).await;
            return Ok(());
        };

        let draft = draft.draft().cloned().ok_or(BilledError::MissingDraft)?;
        let email = current_user(self.local_storage.as_ref())?.email;
        let request = UpdateBillRequest {
            data: form.to_update(
                email,
                draft.file_url.clone(),
                draft.file_name.clone(),
                self.default_pct,
            ),
            selector: draft.selector.clone(),
        };

        store.bills().update(request).await.map_err(|e| {
            tracing::error!(selector = %draft.selector, error = %e, "bill update failed");
            e
        })?;
        tracing::info!(selector = %draft.selector, "bill submitted");

        self.with_state(|state| state.draft = DraftState::Submitted(draft));
        self.on_navigate.navigate(RoutePath::Bills).await;
        Ok(())
    }
}
