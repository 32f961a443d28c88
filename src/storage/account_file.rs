//! Account file codec
//!
//! Reads and writes the line-oriented per-user account format:
//!
//! ```text
//! [USER]
//! password=<text>
//!
//! [BUDGET]
//! <decimal>
//!
//! [SAVINGS]
//! <decimal>
//! ...
//!
//! [EXPENSES]
//! <DD-MM-YYYY>,<category>,<decimal>
//! ...
//! ```
//!
//! Parsing is best-effort: sections may be missing, blank lines are ignored,
//! and the first malformed value line stops the parse at that point. Whatever
//! was parsed before the failure is kept; the failure itself is recorded as a
//! [`LoadWarning`] instead of an error so callers can keep going.

use thiserror::Error;

use crate::models::{format_date, parse_date, Account, Expense, Money};

/// Placeholder written in place of the real password on every save.
///
/// The real secret is only ever written once, at account creation; after the
/// first save the stored secret is the mask itself.
pub const MASKED_PASSWORD: &str = "****";

/// A recoverable problem found while parsing an account file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    #[error("unreadable account file: {0}")]
    Unreadable(String),

    #[error("bad budget line: {0}")]
    Budget(String),

    #[error("bad savings line: {0}")]
    Saving(String),

    #[error("bad expense line: {0}")]
    Expense(String),
}

/// Result of loading an account: the data plus any recovery warnings
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub account: Account,
    pub warnings: Vec<LoadWarning>,
}

impl LoadOutcome {
    /// An empty account with a single warning attached
    pub fn unreadable(username: &str, reason: impl Into<String>) -> Self {
        Self {
            account: Account::new(username, ""),
            warnings: vec![LoadWarning::Unreadable(reason.into())],
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    User,
    Budget,
    Savings,
    Expenses,
}

/// Parse file contents into an account.
///
/// The username is not stored in the file; it comes from the file name and is
/// passed through here.
pub fn parse(username: &str, contents: &str) -> LoadOutcome {
    let mut account = Account::new(username, "");
    let mut warnings = Vec::new();
    let mut section = Section::None;

    for line in contents.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match line.trim() {
            "[USER]" => section = Section::User,
            "[BUDGET]" => section = Section::Budget,
            "[SAVINGS]" => section = Section::Savings,
            "[EXPENSES]" => section = Section::Expenses,
            _ => match section {
                Section::None => {}
                Section::User => {
                    if let Some(password) = line.strip_prefix("password=") {
                        account.password = password.to_string();
                    }
                }
                Section::Budget => {
                    match Money::parse(line) {
                        Ok(amount) => account.monthly_budget = amount,
                        Err(_) => {
                            warnings.push(LoadWarning::Budget(line.to_string()));
                            break;
                        }
                    }
                    // The budget section holds exactly one value line.
                    section = Section::None;
                }
                Section::Savings => match Money::parse(line) {
                    Ok(amount) => account.savings.push(amount),
                    Err(_) => {
                        warnings.push(LoadWarning::Saving(line.to_string()));
                        break;
                    }
                },
                Section::Expenses => match parse_expense_line(line) {
                    Some(expense) => account.expenses.push(expense),
                    None => {
                        warnings.push(LoadWarning::Expense(line.to_string()));
                        break;
                    }
                },
            },
        }
    }

    LoadOutcome { account, warnings }
}

/// `<DD-MM-YYYY>,<category>,<decimal>`
fn parse_expense_line(line: &str) -> Option<Expense> {
    let mut parts = line.splitn(3, ',');
    let date = parse_date(parts.next()?).ok()?;
    let category = parts.next()?;
    let amount = Money::parse(parts.next()?).ok()?;
    Some(Expense::new(amount, category, date))
}

/// Extract the stored password line from file contents
pub fn stored_password(contents: &str) -> Option<&str> {
    contents
        .lines()
        .find_map(|line| line.trim_end_matches('\r').strip_prefix("password="))
}

/// Serialize with the password masked — the form every save writes
pub fn serialize_masked(account: &Account) -> String {
    render(account, MASKED_PASSWORD)
}

/// Serialize with the account's own password — used only at account creation
pub fn serialize_full(account: &Account) -> String {
    render(account, &account.password)
}

fn render(account: &Account, password: &str) -> String {
    let mut out = String::new();

    out.push_str("[USER]\n");
    out.push_str("password=");
    out.push_str(password);
    out.push_str("\n\n");

    out.push_str("[BUDGET]\n");
    out.push_str(&account.monthly_budget.to_string());
    out.push_str("\n\n");

    out.push_str("[SAVINGS]\n");
    for saving in &account.savings {
        out.push_str(&saving.to_string());
        out.push('\n');
    }

    out.push_str("\n[EXPENSES]\n");
    for expense in &account.expenses {
        out.push_str(&format!(
            "{},{},{}\n",
            format_date(expense.date),
            expense.category,
            expense.amount
        ));
    }

    out
}
