//! Core data models
//!
//! - `Money`: amounts as i64 minor units
//! - `Expense`: a dated, categorized amount
//! - `Account`: the persisted per-user record

pub mod account;
pub mod expense;
pub mod money;

pub use account::Account;
pub use expense::{format_date, parse_date, Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
