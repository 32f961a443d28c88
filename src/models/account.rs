//! Account model
//!
//! One account maps 1:1 to one persisted file; the username is the file key.
//! Savings entries are bare amounts with no date attached.

use super::expense::Expense;
use super::money::Money;

/// Persisted per-user record of credentials, budget, savings, and expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    /// Stored in plaintext. After the first save this is the masked
    /// placeholder, not the creation-time secret.
    pub password: String,
    pub monthly_budget: Money,
    pub savings: Vec<Money>,
    pub expenses: Vec<Expense>,
}

impl Account {
    /// A fresh account: zero budget, empty savings, empty expenses
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            monthly_budget: Money::zero(),
            savings: Vec::new(),
            expenses: Vec::new(),
        }
    }
}
