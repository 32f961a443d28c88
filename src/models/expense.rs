//! Expense model and the canonical date format
//!
//! An expense is immutable once created and owned by the session's expense
//! list. Dates are rendered `DD-MM-YYYY` both in the account file and in the
//! CSV report.

use chrono::NaiveDate;

use super::money::Money;

/// The one date format used for storage, reports, and interactive input
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `DD-MM-YYYY` date
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single dated expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
        }
    }
}
