//! Budget summaries
//!
//! Stateless, read-only computations over session data. Savings are never
//! scoped to a month; expense matching for the monthly view is by (month,
//! year) only.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

/// Sum of expenses whose calendar month and year equal today's. The day of
/// month is irrelevant.
pub fn spend_this_month(expenses: &[Expense], today: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.date.month() == today.month() && e.date.year() == today.year())
        .map(|e| e.amount)
        .sum()
}

/// Sum of all recorded savings deposits, unconditionally
pub fn total_savings(savings: &[Money]) -> Money {
    savings.iter().copied().sum()
}

/// `budget - spent - saved`. May go negative; no clamping.
pub fn remaining(budget: Money, spent: Money, saved: Money) -> Money {
    budget - spent - saved
}

/// Expenses on an exact date, plus their total
pub fn expenses_on_date(expenses: &[Expense], date: NaiveDate) -> (Vec<&Expense>, Money) {
    let matches: Vec<&Expense> = expenses.iter().filter(|e| e.date == date).collect();
    let total = matches.iter().map(|e| e.amount).sum();
    (matches, total)
}

/// The summary rendered by the budget status view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub budget: Money,
    pub spent: Money,
    pub saved: Money,
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn compute(
        budget: Money,
        expenses: &[Expense],
        savings: &[Money],
        today: NaiveDate,
    ) -> Self {
        let spent = spend_this_month(expenses, today);
        let saved = total_savings(savings);
        Self {
            budget,
            spent,
            saved,
            remaining: remaining(budget, spent, saved),
        }
    }
}
