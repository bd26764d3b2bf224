//! In-memory store implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// In-memory [`LedgerStore`] backed by id-keyed maps.
///
/// Assigns uuid ids and wall-clock creation timestamps the way a real
/// backend would. Listings come back in arbitrary map order - the core is
/// expected to re-sort.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
        self.entries.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        Ok(self.accounts.read().unwrap().values().cloned().collect())
    }

    async fn create_account(&mut self, khate_number: &str, name: &str) -> LedgerResult<Account> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts
            .values()
            .any(|account| account.khate_number == khate_number)
        {
            return Err(LedgerError::Duplicate(khate_number.to_string()));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            khate_number: khate_number.to_string(),
            name: name.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn update_account(&mut self, id: &str, name: &str) -> LedgerResult<()> {
        match self.accounts.write().unwrap().get_mut(id) {
            Some(account) => {
                account.name = name.to_string();
                Ok(())
            }
            None => Err(LedgerError::Store(format!("account not found: {id}"))),
        }
    }

    async fn delete_account(&mut self, id: &str) -> LedgerResult<()> {
        if self.accounts.write().unwrap().remove(id).is_some() {
            Ok(())
        } else {
            Err(LedgerError::Store(format!("account not found: {id}")))
        }
    }

    async fn list_entries(&self) -> LedgerResult<Vec<Entry>> {
        Ok(self.entries.read().unwrap().values().cloned().collect())
    }

    async fn list_entries_for_account(&self, khate_number: &str) -> LedgerResult<Vec<Entry>> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .values()
            .filter(|entry| entry.account_number == khate_number)
            .cloned()
            .collect())
    }

    async fn create_entry(&mut self, draft: &EntryDraft) -> LedgerResult<Entry> {
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            account_number: draft.account_number.clone(),
            receipt_number: draft.receipt_number.clone(),
            details: draft.details.clone(),
            amount: draft.amount.clone(),
            entry_type: draft.entry_type,
            created_at: Some(chrono::Utc::now().naive_utc()),
        };
        self.entries
            .write()
            .unwrap()
            .insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn update_entry(&mut self, id: &str, draft: &EntryDraft) -> LedgerResult<()> {
        match self.entries.write().unwrap().get_mut(id) {
            Some(entry) => {
                entry.date = draft.date;
                entry.account_number = draft.account_number.clone();
                entry.receipt_number = draft.receipt_number.clone();
                entry.details = draft.details.clone();
                entry.amount = draft.amount.clone();
                entry.entry_type = draft.entry_type;
                Ok(())
            }
            None => Err(LedgerError::Store(format!("entry not found: {id}"))),
        }
    }

    async fn delete_entry(&mut self, id: &str) -> LedgerResult<()> {
        if self.entries.write().unwrap().remove(id).is_some() {
            Ok(())
        } else {
            Err(LedgerError::Store(format!("entry not found: {id}")))
        }
    }
}
