//! New bill form model and its native constraints
//!
//! The constraints mirror what the browser enforces on the form before the
//! submit handler ever runs: required inputs, a date input and number inputs.

use crate::core::bill::{BillStatus, BillUpdate, EXPENSE_TYPES};
use crate::core::receipt::ReceiptFile;
use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// Input fields of the form, named by their `data-testid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ExpenseType,
    Name,
    Date,
    Amount,
    Vat,
    Pct,
    Commentary,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::ExpenseType,
        FormField::Name,
        FormField::Date,
        FormField::Amount,
        FormField::Vat,
        FormField::Pct,
        FormField::Commentary,
    ];

    pub fn test_id(&self) -> &'static str {
        match self {
            FormField::ExpenseType => "expense-type",
            FormField::Name => "expense-name",
            FormField::Date => "datepicker",
            FormField::Amount => "amount",
            FormField::Vat => "vat",
            FormField::Pct => "pct",
            FormField::Commentary => "commentary",
        }
    }

    pub fn from_test_id(test_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.test_id() == test_id)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.test_id())
    }
}

/// Current values of the new bill form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Validate)]
pub struct NewBillForm {
    #[validate(length(min = 1), custom(function = "known_expense_type"))]
    pub expense_type: String,

    pub name: String,

    #[validate(length(min = 1), custom(function = "iso_date"))]
    pub date: String,

    #[validate(length(min = 1), custom(function = "number"))]
    pub amount: String,

    #[validate(custom(function = "number"))]
    pub vat: String,

    #[validate(length(min = 1), custom(function = "number"))]
    pub pct: String,

    pub commentary: String,

    #[serde(skip)]
    #[validate(required)]
    pub file: Option<ReceiptFile>,
}

impl NewBillForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ExpenseType => &self.expense_type,
            FormField::Name => &self.name,
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
            FormField::Vat => &self.vat,
            FormField::Pct => &self.pct,
            FormField::Commentary => &self.commentary,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::ExpenseType => self.expense_type = value,
            FormField::Name => self.name = value,
            FormField::Date => self.date = value,
            FormField::Amount => self.amount = value,
            FormField::Vat => self.vat = value,
            FormField::Pct => self.pct = value,
            FormField::Commentary => self.commentary = value,
        }
    }

    /// Build the submission payload from the entered values
    ///
    /// `amount` is read as a number (0 when unreadable). `pct` is read as an
    /// integer and falls back to `default_pct` when missing or zero.
    pub fn to_update(
        &self,
        email: Option<String>,
        file_url: String,
        file_name: String,
        default_pct: u32,
    ) -> BillUpdate {
        let amount = self.amount.trim().parse::<f64>().unwrap_or_default();
        let pct = self
            .pct
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|pct| pct.is_finite() && *pct >= 1.0)
            .map(|pct| pct.trunc() as u32)
            .unwrap_or(default_pct);

        BillUpdate {
            email,
            expense_type: self.expense_type.clone(),
            name: self.name.clone(),
            amount,
            date: self.date.clone(),
            vat: self.vat.clone(),
            pct,
            commentary: self.commentary.clone(),
            file_url,
            file_name,
            status: BillStatus::Pending,
        }
    }
}

// Empty values pass the format checks below; `length` reports them.

fn known_expense_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || EXPENSE_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("expense_type"))
    }
}

fn iso_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("date"))
    }
}

fn number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.parse::<f64>().is_ok_and(f64::is_finite) {
        Ok(())
    } else {
        Err(ValidationError::new("number"))
    }
}
