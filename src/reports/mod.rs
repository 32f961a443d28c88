//! Read-only aggregation over session data

pub mod summary;

pub use summary::{
    expenses_on_date, remaining, spend_this_month, total_savings, BudgetStatus,
};
