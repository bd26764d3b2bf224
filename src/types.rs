//! Core types and data structures for the ledger book

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The two sides of the dual-column ledger.
///
/// Every entry belongs to exactly one side; an entry is never both.
/// Serialized with the literal Devanagari column names used in the
/// persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Credit (जमा) - increases an account's recorded inflow
    #[serde(rename = "जमा")]
    Jama,
    /// Debit (नावे) - increases an account's recorded outflow
    #[serde(rename = "नावे")]
    Nave,
}

impl EntryType {
    /// The Devanagari column name for this side
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Jama => "जमा",
            EntryType::Nave => "नावे",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named account in the ledger book
///
/// Serializes in the camelCase document shape the store persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque identifier, owned and assigned by the store
    pub id: String,
    /// Caller-assigned natural key (खाते नंबर), unique across all accounts.
    /// Entries reference accounts by this key, so it is immutable after
    /// creation.
    pub khate_number: String,
    /// Display name, mutable
    pub name: String,
    /// Set once at creation time
    pub created_at: NaiveDateTime,
}

/// A single ledger entry against one account
///
/// Serializes in the camelCase document shape the store persists, with the
/// column side under the `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque identifier, owned and assigned by the store
    pub id: String,
    /// Calendar date of the transaction
    pub date: NaiveDate,
    /// The `khate_number` of the account this entry belongs to. Validated
    /// against an existing account at creation time only; the account may
    /// be removed later without invalidating surviving entries.
    pub account_number: String,
    /// Optional free-text receipt reference (पावती नंबर)
    pub receipt_number: Option<String>,
    /// Free-text description (तपशील), required
    pub details: String,
    /// Positive amount with two-decimal-place semantics
    pub amount: BigDecimal,
    /// Which column the amount lands in
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Secondary sort key only. May be absent on a freshly written record
    /// whose server timestamp has not resolved yet.
    pub created_at: Option<NaiveDateTime>,
}

/// The mutable field set of an entry, used for create and update.
///
/// Everything except `id` and `created_at`, which the store owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub account_number: String,
    pub receipt_number: Option<String>,
    pub details: String,
    pub amount: BigDecimal,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl EntryDraft {
    /// Create a new draft
    pub fn new(
        date: NaiveDate,
        account_number: String,
        receipt_number: Option<String>,
        details: String,
        amount: BigDecimal,
        entry_type: EntryType,
    ) -> Self {
        Self {
            date,
            account_number,
            receipt_number,
            details,
            amount,
            entry_type,
        }
    }

    /// Create a credit (जमा) draft
    pub fn jama(
        date: NaiveDate,
        account_number: String,
        details: String,
        amount: BigDecimal,
    ) -> Self {
        Self::new(date, account_number, None, details, amount, EntryType::Jama)
    }

    /// Create a debit (नावे) draft
    pub fn nave(
        date: NaiveDate,
        account_number: String,
        details: String,
        amount: BigDecimal,
    ) -> Self {
        Self::new(date, account_number, None, details, amount, EntryType::Nave)
    }

    /// Set the receipt number
    pub fn with_receipt(mut self, receipt_number: String) -> Self {
        self.receipt_number = Some(receipt_number);
        self
    }

    /// Normalize the draft to the stored amount semantics: two decimal
    /// places, rounded half-up.
    pub fn normalized(mut self) -> Self {
        self.amount = self.amount.with_scale_round(2, RoundingMode::HalfUp);
        self
    }
}

/// Errors surfaced by the ledger book core
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A required field is missing, blank, or numerically invalid.
    /// Recoverable locally; no partial mutation has occurred.
    #[error("Validation error: {0}")]
    Validation(String),
    /// An account create collided on an existing khate number
    #[error("Account number already exists: {0}")]
    Duplicate(String),
    /// An entry create named a khate number no account carries
    #[error("Account not found: {0}")]
    Reference(String),
    /// The store call itself failed; the message is surfaced verbatim and
    /// the attempt is terminal (retry is caller policy)
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
