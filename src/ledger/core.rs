//! Main ledger book facade coordinating accounts and entries

use chrono::NaiveDate;

use crate::aggregation::{self, Totals};
use crate::auth::AdminToken;
use crate::export::{self, ExportSheet};
use crate::ledger::account::{AccountIndex, AccountManager};
use crate::ledger::entry::EntryManager;
use crate::traits::*;
use crate::types::*;

/// The ledger book: validated mutations plus the derived read surfaces.
///
/// Reads fetch a fresh snapshot from the store and re-derive ordering and
/// totals from it; nothing is cached between calls. Mutations require an
/// [`AdminToken`] capability and either complete or fail with exactly one
/// [`LedgerError`] kind - after a successful mutation the caller re-fetches.
pub struct LedgerBook<S: LedgerStore> {
    account_manager: AccountManager<S>,
    entry_manager: EntryManager<S>,
}

impl<S: LedgerStore + Clone> LedgerBook<S> {
    /// Create a new ledger book over the given store
    pub fn new(store: S) -> Self {
        Self {
            account_manager: AccountManager::new(store.clone()),
            entry_manager: EntryManager::new(store),
        }
    }

    /// Create a new ledger book with custom validators
    pub fn with_validators(
        store: S,
        account_validator: Box<dyn AccountValidator>,
        entry_validator: Box<dyn EntryValidator>,
    ) -> Self {
        Self {
            account_manager: AccountManager::with_validator(store.clone(), account_validator),
            entry_manager: EntryManager::with_validator(store, entry_validator),
        }
    }

    // Account operations
    /// List all accounts, ordered by khate number
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.account_manager.list_accounts().await
    }

    /// Fetch a fresh khate-number index over all accounts
    pub async fn account_index(&self) -> LedgerResult<AccountIndex> {
        self.account_manager.account_index().await
    }

    /// Create a new account
    pub async fn create_account(
        &mut self,
        token: &AdminToken,
        khate_number: &str,
        name: &str,
    ) -> LedgerResult<Account> {
        self.account_manager
            .create_account(token, khate_number, name)
            .await
    }

    /// Change an account's display name
    pub async fn rename_account(
        &mut self,
        token: &AdminToken,
        id: &str,
        name: &str,
    ) -> LedgerResult<()> {
        self.account_manager.rename_account(token, id, name).await
    }

    /// Delete an account, cascading over its entries first
    pub async fn delete_account(
        &mut self,
        token: &AdminToken,
        id: &str,
        khate_number: &str,
    ) -> LedgerResult<()> {
        self.account_manager
            .delete_account(token, id, khate_number)
            .await
    }

    // Entry operations
    /// List all entries in canonical chronological order
    pub async fn list_entries(&self) -> LedgerResult<Vec<Entry>> {
        self.entry_manager.list_entries().await
    }

    /// List one account's entries in canonical chronological order
    pub async fn list_entries_for_account(&self, khate_number: &str) -> LedgerResult<Vec<Entry>> {
        self.entry_manager.list_entries_for_account(khate_number).await
    }

    /// Create a new entry
    pub async fn create_entry(
        &mut self,
        token: &AdminToken,
        draft: EntryDraft,
    ) -> LedgerResult<Entry> {
        self.entry_manager.create_entry(token, draft).await
    }

    /// Update an entry's mutable fields
    pub async fn update_entry(
        &mut self,
        token: &AdminToken,
        id: &str,
        draft: EntryDraft,
    ) -> LedgerResult<()> {
        self.entry_manager.update_entry(token, id, draft).await
    }

    /// Delete a single entry
    pub async fn delete_entry(&mut self, token: &AdminToken, id: &str) -> LedgerResult<()> {
        self.entry_manager.delete_entry(token, id).await
    }

    // Derived views
    /// Grand totals and balance for one account
    pub async fn account_totals(&self, khate_number: &str) -> LedgerResult<Totals> {
        let entries = self.entry_manager.list_entries_for_account(khate_number).await?;
        Ok(aggregation::totals(&entries))
    }

    /// Build the all-accounts day book export.
    ///
    /// `on` is the export date stamped into the file label, supplied by the
    /// caller so the sheet itself stays a pure function of the entries.
    pub async fn day_book_export(&self, on: NaiveDate) -> LedgerResult<ExportSheet> {
        let entries = self.entry_manager.list_entries().await?;
        Ok(export::day_book_sheet(&entries, on))
    }

    /// Build one account's ledger export, labeled with the account's
    /// display name (or the "खाते नंबर <n>" fallback)
    pub async fn account_ledger_export(
        &self,
        khate_number: &str,
        on: NaiveDate,
    ) -> LedgerResult<ExportSheet> {
        let index = self.account_manager.account_index().await?;
        let entries = self.entry_manager.list_entries_for_account(khate_number).await?;
        Ok(export::account_ledger_sheet(
            &entries,
            khate_number,
            &index.display_name(khate_number),
            on,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminGate;
    use crate::utils::memory_storage::MemoryStore;
    use bigdecimal::BigDecimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn ledger_book_basic_operations() {
        let mut book = LedgerBook::new(MemoryStore::new());
        let token = AdminGate::new("admin", "secret")
            .authorize("admin", "secret")
            .unwrap();

        let account = book.create_account(&token, "12", "Ram").await.unwrap();
        assert_eq!(account.khate_number, "12");

        book.create_entry(
            &token,
            EntryDraft::jama(
                date(2024, 1, 5),
                "12".to_string(),
                "Ram\ndonation".to_string(),
                BigDecimal::from(100),
            ),
        )
        .await
        .unwrap();
        book.create_entry(
            &token,
            EntryDraft::nave(
                date(2024, 1, 5),
                "12".to_string(),
                "Ram\nfee".to_string(),
                BigDecimal::from(40),
            ),
        )
        .await
        .unwrap();

        let totals = book.account_totals("12").await.unwrap();
        assert_eq!(totals.jama_total.to_string(), "100.00");
        assert_eq!(totals.nave_total.to_string(), "40.00");
        assert_eq!(totals.displayed_balance().to_string(), "60.00");

        let sheet = book
            .account_ledger_export("12", date(2024, 1, 31))
            .await
            .unwrap();
        assert_eq!(sheet.sheet_name, "खाते_12_Ram");
        assert_eq!(sheet.rows.len(), 4);
    }

    #[tokio::test]
    async fn account_export_falls_back_to_khate_number_label() {
        let book = LedgerBook::new(MemoryStore::new());
        let sheet = book
            .account_ledger_export("77", date(2024, 1, 31))
            .await
            .unwrap();
        assert_eq!(sheet.sheet_name, "खाते_77_खाते नंबर 77");
    }
}
