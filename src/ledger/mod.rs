//! Ledger module containing account management and entry processing

pub mod account;
pub mod core;
pub mod entry;

pub use account::*;
pub use entry::*;
pub use self::core::*;
