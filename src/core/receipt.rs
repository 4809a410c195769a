//! Receipt files and the image-type check applied on upload

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Inline message shown next to the file input when a receipt is rejected
pub const RECEIPT_TYPE_ERROR: &str = "Seuls les fichiers jpg, jpeg et png sont autorisés.";

/// Extensions accepted for receipts
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A file picked in the form's file input
///
/// Serializes as its name and MIME type only.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptFile {
    pub name: String,
    /// MIME type reported by the picker; may be empty
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ReceiptFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ReceiptFile {
    pub fn new(bytes: impl Into<Vec<u8>>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EXTENSION_REGEX.get_or_init(|| Regex::new(r"\.([A-Za-z0-9]+)$").unwrap());
        regex
            .captures(&self.name)
            .map(|caps| caps[1].to_ascii_lowercase())
    }

    /// Whether this file may be uploaded as a receipt
    ///
    /// The extension must be jpg, jpeg or png. A non-empty MIME type must be
    /// `image/` with one of the same subtypes.
    pub fn is_allowed_image(&self) -> bool {
        let extension_ok = self
            .extension()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
        if !extension_ok {
            return false;
        }

        if self.mime_type.is_empty() {
            return true;
        }

        let mime = self.mime_type.to_ascii_lowercase();
        mime.strip_prefix("image/")
            .is_some_and(|subtype| ALLOWED_EXTENSIONS.contains(&subtype))
    }
}
