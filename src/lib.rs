//! # Khatabook Core
//!
//! A dual-column (जमा/नावे) ledger book core: date-grouped aggregation,
//! balance tracking, referential integrity by khate number, and
//! spreadsheet-ready export.
//!
//! ## Features
//!
//! - **Dual-column entries**: every entry is a credit (जमा) or a debit
//!   (नावे) against one account
//! - **Aggregation engine**: canonical chronological ordering, per-date
//!   grouping, per-date/per-account/grand totals with signed balances
//! - **Export formatter**: deterministic flat row sequences for the day
//!   book and single-account ledger views, with totals, balance, and
//!   separator rows
//! - **Mutation validation**: field completeness, khate-number uniqueness,
//!   and account-reference checks gating every write
//! - **Cascading account removal**: an account's entries are deleted ahead
//!   of the account record, and the cascade is safely retryable
//! - **Storage abstraction**: database-agnostic design with a trait-based
//!   async store
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//! use khatabook_core::{AdminGate, EntryDraft, LedgerBook, MemoryStore};
//!
//! # async fn demo() -> khatabook_core::LedgerResult<()> {
//! let gate = AdminGate::new("admin", "secret");
//! let token = gate.authorize("admin", "secret").expect("known credentials");
//!
//! let mut book = LedgerBook::new(MemoryStore::new());
//! book.create_account(&token, "12", "Ram").await?;
//! book.create_entry(
//!     &token,
//!     EntryDraft::jama(
//!         NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!         "12".to_string(),
//!         "Ram\nschool fee".to_string(),
//!         BigDecimal::from(100),
//!     ),
//! )
//! .await?;
//!
//! let totals = book.account_totals("12").await?;
//! assert_eq!(totals.displayed_balance().to_string(), "100.00");
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod auth;
pub mod export;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use aggregation::*;
pub use auth::*;
pub use export::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_storage::MemoryStore;
