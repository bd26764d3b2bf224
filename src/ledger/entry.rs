//! Entry management: validated create, update, and delete

use crate::aggregation::sort_chronological;
use crate::auth::AdminToken;
use crate::ledger::account::AccountIndex;
use crate::traits::*;
use crate::types::*;

/// Entry manager gating entry mutations and listings
pub struct EntryManager<S: LedgerStore> {
    pub(crate) store: S,
    validator: Box<dyn EntryValidator>,
}

impl<S: LedgerStore> EntryManager<S> {
    /// Create a new entry manager
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultEntryValidator),
        }
    }

    /// Create a new entry manager with a custom validator
    pub fn with_validator(store: S, validator: Box<dyn EntryValidator>) -> Self {
        Self { store, validator }
    }

    /// List all entries in canonical chronological order
    pub async fn list_entries(&self) -> LedgerResult<Vec<Entry>> {
        Ok(sort_chronological(self.store.list_entries().await?))
    }

    /// List one account's entries in canonical chronological order
    pub async fn list_entries_for_account(&self, khate_number: &str) -> LedgerResult<Vec<Entry>> {
        Ok(sort_chronological(
            self.store.list_entries_for_account(khate_number).await?,
        ))
    }

    /// Create a new entry.
    ///
    /// The draft is normalized and field-validated, and the referenced
    /// account must exist at this moment - the store enforces no foreign
    /// keys, so the check runs here against a fresh account index. On any
    /// failure nothing has been written.
    pub async fn create_entry(
        &mut self,
        _token: &AdminToken,
        draft: EntryDraft,
    ) -> LedgerResult<Entry> {
        let draft = draft.normalized();
        self.validator.validate_draft(&draft)?;

        let index = AccountIndex::build(self.store.list_accounts().await?);
        if !index.contains(&draft.account_number) {
            return Err(LedgerError::Reference(draft.account_number.clone()));
        }

        self.store.create_entry(&draft).await
    }

    /// Update an existing entry's mutable fields.
    ///
    /// Runs the same field validation as create but does not re-check that
    /// the referenced account still exists: an edit may keep a reference to
    /// a since-removed account.
    pub async fn update_entry(
        &mut self,
        _token: &AdminToken,
        id: &str,
        draft: EntryDraft,
    ) -> LedgerResult<()> {
        let draft = draft.normalized();
        self.validator.validate_draft(&draft)?;
        self.store.update_entry(id, &draft).await
    }

    /// Delete a single entry
    pub async fn delete_entry(&mut self, _token: &AdminToken, id: &str) -> LedgerResult<()> {
        self.store.delete_entry(id).await
    }
}
