//! Interactive menu shell
//!
//! Thin I/O glue over the session, store, aggregator, and exporter: a
//! login/register gate followed by the numbered menu loop. Exit saves the
//! session back to the store.

pub mod input;

use chrono::Local;

use crate::auth::{CredentialVerifier, PlaintextVerifier};
use crate::config::{DataPaths, Settings};
use crate::error::{SpendlogError, SpendlogResult};
use crate::export::export_monthly_report;
use crate::reports::{expenses_on_date, BudgetStatus};
use crate::session::Session;
use crate::storage::{AccountStore, LoadOutcome};

/// Run the interactive shell until the user exits
pub fn run(store: &AccountStore, paths: &DataPaths, settings: &Settings) -> SpendlogResult<()> {
    let mut session = login_or_register(store)?;

    loop {
        print_menu();
        let choice = input::prompt_line("Enter choice: ")?;
        match choice.as_str() {
            "1" => add_expense(&mut session)?,
            "2" => set_budget(&mut session)?,
            "3" => add_savings(&mut session)?,
            "4" => view_budget_status(&session, settings),
            "5" => view_expenses_by_date(&session, settings)?,
            "6" => generate_monthly_report(&session, paths)?,
            "7" => {
                store.save(session.account())?;
                break;
            }
            _ => println!("Invalid choice!"),
        }
    }

    println!("Logged out successfully!");
    Ok(())
}

/// Prompt for a username; an existing account gets a password check, a new
/// one gets created. A wrong password terminates the run.
fn login_or_register(store: &AccountStore) -> SpendlogResult<Session> {
    let username = input::prompt_line("Enter Username: ")?;

    if store.account_exists(&username) {
        let password = input::prompt_secret("Enter Password: ")?;
        let verifier = PlaintextVerifier::new(store);
        if !verifier.verify(&username, &password) {
            return Err(SpendlogError::Auth("invalid username or password".into()));
        }
        println!("Login successful!");
    } else {
        let password = input::prompt_secret("Create Password: ")?;
        store.create_account(&username, &password)?;
        println!("Account created successfully!");
    }

    // Corrupt entries are dropped without comment; the session starts from
    // whatever parsed.
    let LoadOutcome {
        account,
        warnings: _,
    } = store.load(&username);
    Ok(Session::new(account))
}

fn print_menu() {
    println!();
    println!("===== EXPENSE TRACKER =====");
    println!("1. Add Expense");
    println!("2. Set Monthly Budget");
    println!("3. Add Savings");
    println!("4. View Budget Status");
    println!("5. View Expenses by Date");
    println!("6. Generate Monthly Report");
    println!("7. Exit");
}

fn add_expense(session: &mut Session) -> SpendlogResult<()> {
    let amount = input::prompt_amount("Amount: ")?;
    let category = input::prompt_line("Category: ")?;
    let date = input::prompt_date("Date (DD-MM-YYYY): ")?;

    session.add_expense(amount, category, date);
    println!("Expense added!");
    Ok(())
}

fn set_budget(session: &mut Session) -> SpendlogResult<()> {
    let amount = input::prompt_amount("Enter Monthly Budget: ")?;
    session.set_budget(amount);
    println!("Budget saved!");
    Ok(())
}

fn add_savings(session: &mut Session) -> SpendlogResult<()> {
    let amount = input::prompt_amount("Enter Savings Amount: ")?;
    session.add_saving(amount);
    println!("Savings added!");
    Ok(())
}

fn view_budget_status(session: &Session, settings: &Settings) {
    let today = Local::now().date_naive();
    let status = BudgetStatus::compute(
        session.budget(),
        session.expenses(),
        session.savings(),
        today,
    );

    let symbol = &settings.currency_symbol;
    println!();
    println!("Budget: {}", status.budget.with_symbol(symbol));
    println!("Spent: {}", status.spent.with_symbol(symbol));
    println!("Savings: {}", status.saved.with_symbol(symbol));
    println!("Remaining: {}", status.remaining.with_symbol(symbol));
}

fn view_expenses_by_date(session: &Session, settings: &Settings) -> SpendlogResult<()> {
    let date = input::prompt_date("Enter Date (DD-MM-YYYY): ")?;
    let (matches, total) = expenses_on_date(session.expenses(), date);

    let symbol = &settings.currency_symbol;
    for expense in &matches {
        println!("{} : {}", expense.category, expense.amount.with_symbol(symbol));
    }
    println!("Total: {}", total.with_symbol(symbol));
    Ok(())
}

/// Report failures are printed and the session keeps running
fn generate_monthly_report(session: &Session, paths: &DataPaths) -> SpendlogResult<()> {
    let month = input::prompt_u32("Month (MM): ")?;
    let year = input::prompt_i32("Year (YYYY): ")?;

    match export_monthly_report(
        &paths.report_dir(),
        session.username(),
        session.expenses(),
        month,
        year,
    ) {
        Ok(path) => println!("Report generated: {}", path.display()),
        Err(e) => println!("Error generating report: {}", e),
    }
    Ok(())
}
