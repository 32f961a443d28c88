//! End-to-end tests driving the interactive shell over piped stdin

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(base_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", base_dir);
    cmd
}

#[test]
fn register_and_exit_creates_account_file() {
    let temp = TempDir::new().unwrap();

    spendlog(temp.path())
        .write_stdin("alice\npw1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created successfully!"))
        .stdout(predicate::str::contains("Logged out successfully!"));

    assert!(temp.path().join("data").join("alice.txt").exists());
}

#[test]
fn invalid_menu_choice_redisplays_menu() {
    let temp = TempDir::new().unwrap();

    spendlog(temp.path())
        .write_stdin("bob\npw\n9\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice!"))
        .stdout(predicate::str::contains("Logged out successfully!"));
}

#[test]
fn saved_password_is_masked_and_mask_becomes_the_secret() {
    let temp = TempDir::new().unwrap();

    // First run registers and exits; exit saves with the masked password.
    spendlog(temp.path())
        .write_stdin("alice\npw1\n7\n")
        .assert()
        .success();

    let contents =
        std::fs::read_to_string(temp.path().join("data").join("alice.txt")).unwrap();
    assert!(contents.contains("password=****"));

    // The creation-time secret no longer matches.
    spendlog(temp.path())
        .write_stdin("alice\npw1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    // The mask does.
    spendlog(temp.path())
        .write_stdin("alice\n****\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"));
}

#[test]
fn expenses_survive_a_restart() {
    let temp = TempDir::new().unwrap();

    spendlog(temp.path())
        .write_stdin("carol\npw\n1\n250.00\nfood\n10-05-2024\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added!"));

    // Log back in and list the expenses for that date.
    spendlog(temp.path())
        .write_stdin("carol\n****\n5\n10-05-2024\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("food : ₹250.00"))
        .stdout(predicate::str::contains("Total: ₹250.00"));
}

#[test]
fn monthly_report_is_written_next_to_the_data_dir() {
    let temp = TempDir::new().unwrap();

    spendlog(temp.path())
        .write_stdin("dave\npw\n1\n100.00\nfood\n01-05-2024\n1\n40.00\nrent\n02-04-2024\n6\n5\n2024\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated:"));

    let report = temp.path().join("monthly_report_dave_5_2024.csv");
    let contents = std::fs::read_to_string(&report).unwrap();
    assert!(contents.starts_with("Date,Category,Amount\n"));
    assert!(contents.contains("01-05-2024,food,100.00"));
    assert!(!contents.contains("rent"));
}

#[test]
fn invalid_amount_reprompts_instead_of_crashing() {
    let temp = TempDir::new().unwrap();

    spendlog(temp.path())
        .write_stdin("erin\npw\n2\nnot-a-number\n1500\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid amount, try again."))
        .stdout(predicate::str::contains("Budget saved!"));
}
