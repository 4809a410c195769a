//! Bill records and the payloads exchanged with the remote store

use crate::core::format::{format_amount, format_date, format_status};
use crate::core::receipt::ReceiptFile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expense categories offered by the new bill form, in display order
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Review status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense record submitted by an employee
///
/// Field names on the wire follow the backend (`type`, `fileUrl`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
}

impl Bill {
    /// A draft bill as created by a receipt upload: only the receipt and
    /// owner are known.
    pub fn draft(id: impl Into<String>, email: Option<String>, file_url: String, file_name: String) -> Self {
        Self {
            id: id.into(),
            email,
            expense_type: String::new(),
            name: String::new(),
            amount: 0.0,
            date: String::new(),
            vat: String::new(),
            pct: 0,
            commentary: String::new(),
            file_url: Some(file_url),
            file_name: Some(file_name),
            comment_admin: None,
            status: BillStatus::Pending,
        }
    }

    /// Overwrite the submitted fields of this bill with `update`
    pub fn apply(&mut self, update: &BillUpdate) {
        self.email = update.email.clone();
        self.expense_type = update.expense_type.clone();
        self.name = update.name.clone();
        self.amount = update.amount;
        self.date = update.date.clone();
        self.vat = update.vat.clone();
        self.pct = update.pct;
        self.commentary = update.commentary.clone();
        self.file_url = Some(update.file_url.clone());
        self.file_name = Some(update.file_name.clone());
        self.status = update.status;
    }
}

/// Full field set sent by the form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

/// Headers hint for the create call; uploads let the client pick the
/// multipart content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeaders {
    pub no_content_type: bool,
}

/// Payload of a create call
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptUpload {
    pub file: ReceiptFile,
    pub email: Option<String>,
}

/// `bills().create(...)` request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBillRequest {
    pub data: ReceiptUpload,
    pub headers: RequestHeaders,
}

/// Response of a create call; `key` is the selector for the later update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    pub file_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    pub key: String,
}

/// `bills().update(...)` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBillRequest {
    pub data: BillUpdate,
    pub selector: String,
}

/// A bill prepared for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    pub id: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub amount_label: String,
    /// Display date, or the raw date when it could not be formatted
    pub date: String,
    pub raw_date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub email: Option<String>,
    pub status: BillStatus,
    pub status_label: &'static str,
}

impl From<&Bill> for BillView {
    fn from(bill: &Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!(bill_id = %bill.id, date = %bill.date, error = %e, "keeping unformatted bill date");
                bill.date.clone()
            }
        };

        Self {
            id: bill.id.clone(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            amount: bill.amount,
            amount_label: format_amount(bill.amount),
            date,
            raw_date: bill.date.clone(),
            vat: bill.vat.clone(),
            pct: bill.pct,
            commentary: bill.commentary.clone(),
            file_url: bill.file_url.clone().unwrap_or_default(),
            file_name: bill.file_name.clone().unwrap_or_default(),
            email: bill.email.clone(),
            status: bill.status,
            status_label: format_status(bill.status),
        }
    }
}
