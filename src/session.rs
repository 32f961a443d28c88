//! Session state
//!
//! The in-memory working copy of one account for the duration of a run.
//! Mutations are append-only: there are no delete or edit operations. The
//! session is flushed to the store in full on exit.

use chrono::NaiveDate;

use crate::models::{Account, Expense, Money};

/// One loaded account, mutable for the current run
#[derive(Debug, Clone)]
pub struct Session {
    account: Account,
}

impl Session {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn budget(&self) -> Money {
        self.account.monthly_budget
    }

    pub fn savings(&self) -> &[Money] {
        &self.account.savings
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.account.expenses
    }

    /// Append an expense. No validation: the amount may be non-positive and
    /// the date may be in the future.
    pub fn add_expense(&mut self, amount: Money, category: impl Into<String>, date: NaiveDate) {
        self.account
            .expenses
            .push(Expense::new(amount, category, date));
    }

    /// Replace the monthly budget unconditionally
    pub fn set_budget(&mut self, amount: Money) {
        self.account.monthly_budget = amount;
    }

    /// Append a savings deposit
    pub fn add_saving(&mut self, amount: Money) {
        self.account.savings.push(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_expense_appends_in_order() {
        let mut session = Session::new(Account::new("alice", "pw1"));
        session.add_expense(Money::from_minor(10000), "food", date(2024, 5, 10));
        session.add_expense(Money::from_minor(5000), "bus", date(2024, 5, 11));

        assert_eq!(session.expenses().len(), 2);
        assert_eq!(session.expenses()[0].category, "food");
        assert_eq!(session.expenses()[1].category, "bus");
    }

    #[test]
    fn test_set_budget_replaces() {
        let mut session = Session::new(Account::new("alice", "pw1"));
        session.set_budget(Money::from_minor(200000));
        session.set_budget(Money::from_minor(100000));
        assert_eq!(session.budget(), Money::from_minor(100000));
    }

    #[test]
    fn test_add_saving_appends() {
        let mut session = Session::new(Account::new("alice", "pw1"));
        session.add_saving(Money::from_minor(30000));
        session.add_saving(Money::from_minor(20000));
        assert_eq!(
            session.savings(),
            &[Money::from_minor(30000), Money::from_minor(20000)]
        );
    }

    #[test]
    fn test_no_validation_on_expense() {
        let mut session = Session::new(Account::new("alice", "pw1"));
        session.add_expense(Money::from_minor(-500), "refund", date(2099, 1, 1));
        assert_eq!(session.expenses().len(), 1);
    }
}
