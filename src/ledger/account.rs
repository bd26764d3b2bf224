//! Account management and the natural-key account index

use std::collections::HashMap;

use crate::auth::AdminToken;
use crate::traits::*;
use crate::types::*;

/// Lookup structure mapping khate numbers to their accounts.
///
/// Entries reference accounts by khate number, not by store id, and the
/// store enforces no foreign keys - this index is the integrity check.
/// It is a snapshot: rebuild it from a fresh fetch before relying on it.
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    by_khate: HashMap<String, Account>,
}

impl AccountIndex {
    /// Build the index from a fetched account collection
    pub fn build(accounts: Vec<Account>) -> Self {
        let by_khate = accounts
            .into_iter()
            .map(|account| (account.khate_number.clone(), account))
            .collect();
        Self { by_khate }
    }

    /// Look up an account by khate number (case-sensitive exact match)
    pub fn get(&self, khate_number: &str) -> Option<&Account> {
        self.by_khate.get(khate_number)
    }

    /// Whether any account carries this khate number
    pub fn contains(&self, khate_number: &str) -> bool {
        self.by_khate.contains_key(khate_number)
    }

    /// Display name for a khate number, falling back to "खाते नंबर <n>"
    /// when the account is missing or unnamed
    pub fn display_name(&self, khate_number: &str) -> String {
        match self.get(khate_number) {
            Some(account) if !account.name.trim().is_empty() => account.name.clone(),
            _ => format!("खाते नंबर {khate_number}"),
        }
    }

    pub fn len(&self) -> usize {
        self.by_khate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_khate.is_empty()
    }
}

/// Account manager gating account mutations and listings
pub struct AccountManager<S: LedgerStore> {
    pub(crate) store: S,
    validator: Box<dyn AccountValidator>,
}

impl<S: LedgerStore> AccountManager<S> {
    /// Create a new account manager
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultAccountValidator),
        }
    }

    /// Create a new account manager with a custom validator
    pub fn with_validator(store: S, validator: Box<dyn AccountValidator>) -> Self {
        Self { store, validator }
    }

    /// List all accounts, ordered by khate number
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        let mut accounts = self.store.list_accounts().await?;
        accounts.sort_by(|a, b| a.khate_number.cmp(&b.khate_number));
        Ok(accounts)
    }

    /// Fetch a fresh natural-key index over all accounts
    pub async fn account_index(&self) -> LedgerResult<AccountIndex> {
        Ok(AccountIndex::build(self.store.list_accounts().await?))
    }

    /// Create a new account
    pub async fn create_account(
        &mut self,
        _token: &AdminToken,
        khate_number: &str,
        name: &str,
    ) -> LedgerResult<Account> {
        self.validator.validate_new_account(khate_number, name)?;

        // The store enforces no uniqueness; check against a fresh index
        let index = self.account_index().await?;
        if index.contains(khate_number) {
            return Err(LedgerError::Duplicate(khate_number.to_string()));
        }

        self.store.create_account(khate_number, name).await
    }

    /// Change an account's display name. The khate number is immutable.
    pub async fn rename_account(
        &mut self,
        _token: &AdminToken,
        id: &str,
        name: &str,
    ) -> LedgerResult<()> {
        self.validator.validate_rename(name)?;
        self.store.update_account(id, name).await
    }

    /// Delete an account and everything it owns.
    ///
    /// Cascades by deleting the account's entries first, then the account
    /// record, so an interruption never leaves the account gone while its
    /// entries survive unreferenced. The cascade is best-effort two-phase,
    /// not atomic: a failure mid-way leaves some entries deleted and the
    /// account present, and the whole operation is safe to retry.
    pub async fn delete_account(
        &mut self,
        _token: &AdminToken,
        id: &str,
        khate_number: &str,
    ) -> LedgerResult<()> {
        let entries = self.store.list_entries_for_account(khate_number).await?;
        for entry in &entries {
            self.store.delete_entry(&entry.id).await?;
        }
        self.store.delete_account(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminGate;
    use crate::utils::memory_storage::MemoryStore;

    fn token() -> AdminToken {
        AdminGate::new("admin", "secret").authorize("admin", "secret").unwrap()
    }

    #[tokio::test]
    async fn create_rejects_duplicate_khate_number() {
        let mut manager = AccountManager::new(MemoryStore::new());
        let token = token();

        manager.create_account(&token, "101", "Shala Fund").await.unwrap();
        let err = manager
            .create_account(&token, "101", "Other Name")
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate(n) if n == "101"));

        // case-sensitive exact match: a different casing is a new account
        manager.create_account(&token, "101a", "Lower").await.unwrap();
        manager.create_account(&token, "101A", "Upper").await.unwrap();
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let mut manager = AccountManager::new(MemoryStore::new());
        let token = token();

        let err = manager.create_account(&token, "  ", "Ram").await.unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        let err = manager.create_account(&token, "101", " ").await.unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[tokio::test]
    async fn listing_orders_by_khate_number() {
        let mut manager = AccountManager::new(MemoryStore::new());
        let token = token();

        manager.create_account(&token, "20", "B").await.unwrap();
        manager.create_account(&token, "101", "C").await.unwrap();
        manager.create_account(&token, "12", "A").await.unwrap();

        let numbers: Vec<String> = manager
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.khate_number)
            .collect();
        assert_eq!(numbers, ["101", "12", "20"]);
    }

    #[tokio::test]
    async fn index_display_name_falls_back() {
        let mut manager = AccountManager::new(MemoryStore::new());
        let token = token();
        manager.create_account(&token, "12", "Ram").await.unwrap();

        let index = manager.account_index().await.unwrap();
        assert_eq!(index.display_name("12"), "Ram");
        assert_eq!(index.display_name("999"), "खाते नंबर 999");
    }
}
