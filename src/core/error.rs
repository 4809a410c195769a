//! Typed error handling for the Billed client
//!
//! # Error Categories
//!
//! - [`StoreError`]: failures reported by the remote store (list/create/update)
//! - [`BilledError`]: everything a container, view or the router can fail with
//!
//! Store failures keep the message the page shows to the user, so a rejected
//! list call with status 404 renders as `Erreur 404`.
//!
//! # Example
//!
//! ```rust,ignore
//! match bills.get_bills().await {
//!     Ok(rows) => render(rows),
//!     Err(BilledError::Store(StoreError::Http { status: 404, .. })) => not_found(),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Errors returned by a [`BillsService`](crate::core::service::BillsService)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The backend answered with a non-success HTTP status
    #[error("Erreur {status}")]
    Http { status: u16 },

    /// The call was rejected with a plain message
    #[error("{0}")]
    Rejected(String),

    /// The request never reached the backend or the response was unreadable
    #[error("Erreur réseau: {0}")]
    Transport(String),

    /// The selector passed to `update` does not match any bill
    #[error("Note de frais introuvable: {selector}")]
    UnknownSelector { selector: String },
}

impl StoreError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Http { .. } => "STORE_HTTP_ERROR",
            StoreError::Rejected(_) => "STORE_REJECTED",
            StoreError::Transport(_) => "STORE_TRANSPORT_ERROR",
            StoreError::UnknownSelector { .. } => "STORE_UNKNOWN_SELECTOR",
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// The main error type for the Billed client
#[derive(Debug, Error)]
pub enum BilledError {
    /// Remote store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No `user` entry in local storage
    #[error("Aucun utilisateur connecté")]
    NoUser,

    /// The `user` entry exists but is not a valid user record
    #[error("Utilisateur invalide: {0}")]
    InvalidUser(#[source] serde_json::Error),

    /// Submission attempted before a draft bill was created by a file upload
    #[error("Aucun justificatif n'a été téléversé pour cette note de frais")]
    MissingDraft,

    /// The form did not pass its constraints
    #[error("Formulaire invalide: {0}")]
    InvalidForm(#[from] validator::ValidationErrors),

    /// A page template failed to render
    #[error("Erreur de rendu: {0}")]
    Template(String),

    /// Navigation to a path with no route
    #[error("Page introuvable: {0}")]
    UnknownRoute(String),
}

impl BilledError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BilledError::Store(e) => e.error_code(),
            BilledError::NoUser => "NO_USER",
            BilledError::InvalidUser(_) => "INVALID_USER",
            BilledError::MissingDraft => "MISSING_DRAFT",
            BilledError::InvalidForm(_) => "INVALID_FORM",
            BilledError::Template(_) => "TEMPLATE_ERROR",
            BilledError::UnknownRoute(_) => "UNKNOWN_ROUTE",
        }
    }
}

impl From<tera::Error> for BilledError {
    fn from(err: tera::Error) -> Self {
        // tera nests the useful part of the message in its source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        BilledError::Template(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_page_message() {
        assert_eq!(StoreError::Http { status: 404 }.to_string(), "Erreur 404");
        assert_eq!(StoreError::Http { status: 500 }.to_string(), "Erreur 500");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: BilledError = StoreError::Rejected("Erreur 404".to_string()).into();
        assert_eq!(err.to_string(), "Erreur 404");
        assert_eq!(err.error_code(), "STORE_REJECTED");
    }

    #[test]
    fn test_status_only_for_http() {
        assert_eq!(StoreError::Http { status: 500 }.status(), Some(500));
        assert_eq!(StoreError::Transport("refused".into()).status(), None);
    }
}
