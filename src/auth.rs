//! Credential verification
//!
//! The verifier is a trait so the login gate can change its comparison scheme
//! without touching the [`AccountStore`] contract. The shipped implementation
//! compares the stored plaintext line for exact equality.

use crate::storage::AccountStore;

/// Gate access per username
pub trait CredentialVerifier {
    fn verify(&self, username: &str, secret: &str) -> bool;
}

/// Exact string comparison against the password line in the account file.
/// Fails closed on a missing file, a read error, or a malformed file.
pub struct PlaintextVerifier<'a> {
    store: &'a AccountStore,
}

impl<'a> PlaintextVerifier<'a> {
    pub fn new(store: &'a AccountStore) -> Self {
        Self { store }
    }
}

impl CredentialVerifier for PlaintextVerifier<'_> {
    fn verify(&self, username: &str, secret: &str) -> bool {
        self.store.authenticate(username, secret)
    }
}
