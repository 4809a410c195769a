//! Display formatting for bill dates, statuses and amounts

use crate::core::bill::BillStatus;
use chrono::{Datelike, NaiveDate};

/// French short month names, capitalized and cut to three letters
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date (`YYYY-MM-DD`) for display: `2004-04-04` → `4 Avr. 04`
pub fn format_date(date: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let month = MONTHS[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

/// French label of a bill status
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

/// Amount label without a trailing `.0` for whole amounts
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}
