//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the ledger book.
///
/// The core works against any backend (a document store, SQL, in-memory)
/// implementing these methods. The store owns id assignment and creation
/// timestamps, but enforces no referential integrity between entries and
/// accounts - that is the core's job. Calls may fail at any time; failures
/// surface as [`LedgerError::Store`] and are never retried by the core.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// List all accounts, in any order
    async fn list_accounts(&self) -> LedgerResult<Vec<Account>>;

    /// Persist a new account, rejecting a duplicate khate number
    async fn create_account(&mut self, khate_number: &str, name: &str) -> LedgerResult<Account>;

    /// Update an account's display name. The khate number is immutable
    /// once entries may reference it, so no other field is writable.
    async fn update_account(&mut self, id: &str, name: &str) -> LedgerResult<()>;

    /// Remove an account record. Does NOT cascade - callers must delete
    /// the account's entries first (see `AccountManager::delete_account`).
    async fn delete_account(&mut self, id: &str) -> LedgerResult<()>;

    /// List all entries, in any order
    async fn list_entries(&self) -> LedgerResult<Vec<Entry>>;

    /// List the entries referencing one account's khate number, in any order
    async fn list_entries_for_account(&self, khate_number: &str) -> LedgerResult<Vec<Entry>>;

    /// Persist a new entry, assigning its id and creation timestamp
    async fn create_entry(&mut self, draft: &EntryDraft) -> LedgerResult<Entry>;

    /// Overwrite an entry's mutable fields
    async fn update_entry(&mut self, id: &str, draft: &EntryDraft) -> LedgerResult<()>;

    /// Remove a single entry
    async fn delete_entry(&mut self, id: &str) -> LedgerResult<()>;
}

/// Trait for implementing custom account validation rules
pub trait AccountValidator: Send + Sync {
    /// Validate the fields of an account about to be created
    fn validate_new_account(&self, khate_number: &str, name: &str) -> LedgerResult<()>;

    /// Validate a display-name change
    fn validate_rename(&self, name: &str) -> LedgerResult<()>;
}

/// Trait for implementing custom entry validation rules
pub trait EntryValidator: Send + Sync {
    /// Validate an entry draft before it is sent to the store
    fn validate_draft(&self, draft: &EntryDraft) -> LedgerResult<()>;
}

/// Default account validator with the basic field-completeness rules
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_new_account(&self, khate_number: &str, name: &str) -> LedgerResult<()> {
        crate::utils::validation::validate_khate_number(khate_number)?;
        crate::utils::validation::validate_account_name(name)?;
        Ok(())
    }

    fn validate_rename(&self, name: &str) -> LedgerResult<()> {
        crate::utils::validation::validate_account_name(name)
    }
}

/// Default entry validator with the basic field-completeness rules
pub struct DefaultEntryValidator;

impl EntryValidator for DefaultEntryValidator {
    fn validate_draft(&self, draft: &EntryDraft) -> LedgerResult<()> {
        crate::utils::validation::validate_khate_number(&draft.account_number)?;
        crate::utils::validation::validate_details(&draft.details)?;
        crate::utils::validation::validate_positive_amount(&draft.amount)?;
        Ok(())
    }
}
