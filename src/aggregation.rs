//! Aggregation engine: date grouping, totals, and balances
//!
//! Pure functions over an already-fetched entry collection. Nothing here
//! touches the store or fails: empty input degrades to zero totals and no
//! buckets. Amounts are summed exactly and rounded to two decimal places
//! once, at each total boundary, never per addend.

use std::collections::BTreeMap;

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::{Entry, EntryType};

/// One date's entries partitioned into the two ledger columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateBucket {
    /// Credit (जमा) entries, in canonical order
    pub jama: Vec<Entry>,
    /// Debit (नावे) entries, in canonical order
    pub nave: Vec<Entry>,
}

impl DateBucket {
    /// Totals over this bucket alone
    pub fn totals(&self) -> Totals {
        Totals::from_sides(
            self.jama.iter().map(|e| &e.amount).sum(),
            self.nave.iter().map(|e| &e.amount).sum(),
        )
    }

    /// Number of paired rows a two-column rendering of this bucket needs
    pub fn paired_len(&self) -> usize {
        self.jama.len().max(self.nave.len())
    }
}

/// Credit and debit totals for a scope (a date, an account, or the whole
/// ledger), with the signed balance between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of जमा amounts, rounded to two places
    pub jama_total: BigDecimal,
    /// Sum of नावे amounts, rounded to two places
    pub nave_total: BigDecimal,
    /// `jama_total - nave_total`, signed. Callers needing the direction of
    /// the balance inspect this; display surfaces show the magnitude.
    pub balance: BigDecimal,
}

impl Totals {
    fn from_sides(jama_sum: BigDecimal, nave_sum: BigDecimal) -> Self {
        let jama_total = jama_sum.with_scale_round(2, RoundingMode::HalfUp);
        let nave_total = nave_sum.with_scale_round(2, RoundingMode::HalfUp);
        let balance = &jama_total - &nave_total;
        Self {
            jama_total,
            nave_total,
            balance,
        }
    }

    /// The balance as displayed (शिल्लक): absolute value, sign dropped
    pub fn displayed_balance(&self) -> BigDecimal {
        self.balance.abs()
    }
}

/// Sort entries into the canonical chronological order: date ascending,
/// then creation time ascending.
///
/// The sort is stable, so entries with equal keys keep their relative input
/// order. A missing creation timestamp (a record whose server timestamp has
/// not resolved) orders after any present one. The ordering depends only on
/// entry contents and is safe to recompute on every read.
pub fn sort_chronological(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by_key(|e| (e.date, e.created_at.unwrap_or(NaiveDateTime::MAX)));
    entries
}

/// Group entries into per-date buckets, dates ascending.
///
/// Within a bucket each column keeps the input order, which callers are
/// expected to have made canonical via [`sort_chronological`].
pub fn group_by_date(entries: &[Entry]) -> BTreeMap<NaiveDate, DateBucket> {
    let mut groups: BTreeMap<NaiveDate, DateBucket> = BTreeMap::new();
    for entry in entries {
        let bucket = groups.entry(entry.date).or_default();
        match entry.entry_type {
            EntryType::Jama => bucket.jama.push(entry.clone()),
            EntryType::Nave => bucket.nave.push(entry.clone()),
        }
    }
    groups
}

/// Totals over a whole entry collection
pub fn totals(entries: &[Entry]) -> Totals {
    let jama_sum = entries
        .iter()
        .filter(|e| e.entry_type == EntryType::Jama)
        .map(|e| &e.amount)
        .sum();
    let nave_sum = entries
        .iter()
        .filter(|e| e.entry_type == EntryType::Nave)
        .map(|e| &e.amount)
        .sum();
    Totals::from_sides(jama_sum, nave_sum)
}

/// Apply [`DateBucket::totals`] to each date bucket
pub fn per_date_totals(groups: &BTreeMap<NaiveDate, DateBucket>) -> BTreeMap<NaiveDate, Totals> {
    groups
        .iter()
        .map(|(date, bucket)| (*date, bucket.totals()))
        .collect()
}

/// Totals over the subset of entries referencing one account
pub fn per_account_totals(entries: &[Entry], account_number: &str) -> Totals {
    let scoped: Vec<Entry> = entries
        .iter()
        .filter(|e| e.account_number == account_number)
        .cloned()
        .collect();
    totals(&scoped)
}
