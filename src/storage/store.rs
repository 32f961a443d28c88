//! Account store
//!
//! Maps a username to a durable text file under the data directory and back.
//! Every operation opens, uses, and closes the file within the call; no
//! handle is held across operations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Account;

use super::account_file::{self, LoadOutcome};

/// Durable storage for accounts, one text file per username
#[derive(Debug, Clone)]
pub struct AccountStore {
    data_dir: PathBuf,
}

impl AccountStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The file backing a username: `<data_dir>/<username>.txt`
    pub fn account_path(&self, username: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", username))
    }

    /// File existence is account existence
    pub fn account_exists(&self, username: &str) -> bool {
        self.account_path(username).exists()
    }

    /// Create a fresh account file with the given password, zero budget, and
    /// empty lists. This is the only write that stores the real password.
    pub fn create_account(&self, username: &str, password: &str) -> SpendlogResult<Account> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            SpendlogError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let account = Account::new(username, password);
        let path = self.account_path(username);
        fs::write(&path, account_file::serialize_full(&account)).map_err(|e| {
            SpendlogError::Storage(format!("Failed to create {}: {}", path.display(), e))
        })?;

        Ok(account)
    }

    /// Read the stored password line; fails closed (None) on a missing file,
    /// a read error, or a file without a password line.
    pub fn stored_password(&self, username: &str) -> Option<String> {
        let contents = fs::read_to_string(self.account_path(username)).ok()?;
        account_file::stored_password(&contents).map(str::to_string)
    }

    /// Compare the stored password for exact string equality; fails closed
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.stored_password(username)
            .is_some_and(|stored| stored == password)
    }

    /// Load an account. Never fails: corruption and read errors are absorbed
    /// into the outcome's warning list and the account keeps whatever parsed.
    pub fn load(&self, username: &str) -> LoadOutcome {
        let path = self.account_path(username);
        match fs::read_to_string(&path) {
            Ok(contents) => account_file::parse(username, &contents),
            Err(e) => LoadOutcome::unreadable(username, format!("{}: {}", path.display(), e)),
        }
    }

    /// Overwrite the account file with the full serialized account. The
    /// password is always written masked.
    pub fn save(&self, account: &Account) -> SpendlogResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            SpendlogError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let path = self.account_path(&account.username);
        fs::write(&path, account_file::serialize_masked(account)).map_err(|e| {
            SpendlogError::Storage(format!("Failed to save {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::storage::account_file::{LoadWarning, MASKED_PASSWORD};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, AccountStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = AccountStore::new(temp_dir.path().join("data"));
        (temp_dir, store)
    }

    #[test]
    fn test_account_exists_before_and_after_create() {
        let (_temp_dir, store) = create_test_store();

        assert!(!store.account_exists("alice"));
        store.create_account("alice", "pw1").unwrap();
        assert!(store.account_exists("alice"));
    }

    #[test]
    fn test_authenticate_truth_table() {
        let (_temp_dir, store) = create_test_store();
        store.create_account("alice", "pw1").unwrap();

        assert!(store.authenticate("alice", "pw1"));
        assert!(!store.authenticate("alice", "wrong"));
        assert!(!store.authenticate("nobody", "pw1"));
    }

    #[test]
    fn test_authenticate_fails_closed_on_malformed_file() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.data_dir()).unwrap();
        fs::write(store.account_path("mallory"), "no sections here\n").unwrap();

        assert!(!store.authenticate("mallory", ""));
        assert!(!store.authenticate("mallory", "no sections here"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let mut account = store.create_account("alice", "pw1").unwrap();
        account.monthly_budget = Money::parse("2000").unwrap();
        account.savings.push(Money::parse("300").unwrap());
        account.expenses.push(Expense::new(
            Money::parse("500").unwrap(),
            "food",
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        ));

        store.save(&account).unwrap();
        let outcome = store.load("alice");

        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.account.monthly_budget, account.monthly_budget);
        assert_eq!(outcome.account.savings, account.savings);
        assert_eq!(outcome.account.expenses, account.expenses);
    }

    #[test]
    fn test_save_masks_password_and_mask_becomes_the_secret() {
        let (_temp_dir, store) = create_test_store();
        let account = store.create_account("alice", "pw1").unwrap();

        // Fresh file authenticates with the real password.
        assert!(store.authenticate("alice", "pw1"));

        // Any save rewrites the password as the mask; from then on the mask
        // is the only secret that matches.
        store.save(&account).unwrap();
        assert!(!store.authenticate("alice", "pw1"));
        assert!(store.authenticate("alice", MASKED_PASSWORD));
    }

    #[test]
    fn test_load_missing_file_yields_default_with_warning() {
        let (_temp_dir, store) = create_test_store();
        let outcome = store.load("ghost");

        assert_eq!(outcome.account.username, "ghost");
        assert!(outcome.account.expenses.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(outcome.warnings[0], LoadWarning::Unreadable(_)));
    }

    #[test]
    fn test_load_corrupt_file_keeps_partial_data() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.data_dir()).unwrap();
        fs::write(
            store.account_path("carol"),
            "[BUDGET]\n1500.00\n\n[SAVINGS]\nnot-money\n",
        )
        .unwrap();

        let outcome = store.load("carol");
        assert_eq!(outcome.account.monthly_budget, Money::from_minor(150000));
        assert!(outcome.account.savings.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
