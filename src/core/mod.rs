//! Core module containing the domain types and collaborator traits

pub mod bill;
pub mod error;
pub mod form;
pub mod format;
pub mod receipt;
pub mod service;
pub mod user;

pub use bill::{
    Bill, BillStatus, BillUpdate, BillView, CreateBillRequest, CreatedBill, EXPENSE_TYPES,
    ReceiptUpload, RequestHeaders, UpdateBillRequest,
};
pub use error::{BilledError, StoreError};
pub use form::{FormField, NewBillForm};
pub use format::{format_amount, format_date, format_status};
pub use receipt::{ALLOWED_EXTENSIONS, RECEIPT_TYPE_ERROR, ReceiptFile};
pub use service::{BillsService, LocalStorage, Store};
pub use user::{USER_KEY, User, UserType, current_user};
