//! Export formatter: flat row sequences for spreadsheet and print output
//!
//! Turns the aggregation engine's grouped output into ordered rows of
//! string cells, including the synthetic totals (एकूण), balance (शिल्लक),
//! and separator rows the printed ledger carries. The formatter is a pure
//! function of its input: identical entry sets produce byte-identical row
//! sequences, and row order mirrors the canonical chronological ordering.
//! The "current date" stamped into file labels is an explicit parameter.

use std::collections::BTreeMap;

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregation::{group_by_date, sort_chronological, totals, DateBucket};
use crate::types::{Entry, EntryType};

/// Column headers for the two-column day book export: five columns for the
/// जमा side, the same five for the नावे side.
pub const DAY_BOOK_HEADERS: [&str; 10] = [
    "तारीख",
    "खाते नं.",
    "पावती नं.",
    "तपशील",
    "रक्कम",
    "तारीख",
    "खाते नं.",
    "पावती नं.",
    "तपशील",
    "रक्कम",
];

/// Column headers for the single-account ledger export
pub const ACCOUNT_LEDGER_HEADERS: [&str; 5] =
    ["तारीख", "खाते नं.", "तपशील", "जमा रक्कम", "नावे रक्कम"];

const TOTALS_LABEL: &str = "एकूण:";
const BALANCE_LABEL: &str = "शिल्लक:";

/// A rendered sheet: ordered rows plus the suggested sheet and file labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSheet {
    /// Suggested worksheet name
    pub sheet_name: String,
    /// Suggested file name, without extension (the file format belongs to
    /// the caller)
    pub file_stem: String,
    /// Column headers, one label per cell
    pub headers: Vec<String>,
    /// Data rows; every row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

fn format_amount(amount: &BigDecimal) -> String {
    amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_string()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn format_label_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

fn receipt_cell(entry: &Entry) -> String {
    match entry.receipt_number.as_deref() {
        Some(receipt) if !receipt.trim().is_empty() => receipt.to_string(),
        _ => "-".to_string(),
    }
}

fn side_cells(entry: Option<&Entry>) -> [String; 5] {
    match entry {
        Some(e) => [
            format_date(e.date),
            e.account_number.clone(),
            receipt_cell(e),
            e.details.clone(),
            format_amount(&e.amount),
        ],
        None => Default::default(),
    }
}

/// Render date-grouped buckets into the two-column day book layout.
///
/// For each date: `max(jama, nave)` paired rows (the i-th जमा entry beside
/// the i-th नावे entry, the shorter side blank), one daily totals row, one
/// daily balance row, then a blank separator row.
pub fn day_book_rows(groups: &BTreeMap<NaiveDate, DateBucket>) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for bucket in groups.values() {
        for i in 0..bucket.paired_len() {
            let mut row = Vec::with_capacity(10);
            row.extend(side_cells(bucket.jama.get(i)));
            row.extend(side_cells(bucket.nave.get(i)));
            rows.push(row);
        }

        let daily = bucket.totals();
        let mut totals_row = vec![String::new(); 10];
        totals_row[3] = TOTALS_LABEL.to_string();
        totals_row[4] = format_amount(&daily.jama_total);
        totals_row[8] = TOTALS_LABEL.to_string();
        totals_row[9] = format_amount(&daily.nave_total);
        rows.push(totals_row);

        let mut balance_row = vec![String::new(); 10];
        balance_row[8] = BALANCE_LABEL.to_string();
        balance_row[9] = format!("₹{}", format_amount(&daily.displayed_balance()));
        rows.push(balance_row);

        rows.push(vec![String::new(); 10]);
    }
    rows
}

/// Render one account's entries into the single-column-pair ledger layout:
/// one row per entry in chronological order, then a grand totals row and a
/// balance row.
pub fn account_ledger_rows(entries: &[Entry]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(entries.len() + 2);
    for entry in entries {
        let amount = format_amount(&entry.amount);
        let (jama_cell, nave_cell) = match entry.entry_type {
            EntryType::Jama => (amount, String::new()),
            EntryType::Nave => (String::new(), amount),
        };
        rows.push(vec![
            format_date(entry.date),
            entry.account_number.clone(),
            entry.details.clone(),
            jama_cell,
            nave_cell,
        ]);
    }

    let grand = totals(entries);
    rows.push(vec![
        String::new(),
        String::new(),
        TOTALS_LABEL.to_string(),
        format_amount(&grand.jama_total),
        format_amount(&grand.nave_total),
    ]);
    rows.push(vec![
        String::new(),
        String::new(),
        BALANCE_LABEL.to_string(),
        String::new(),
        format!("₹{}", format_amount(&grand.displayed_balance())),
    ]);
    rows
}

/// Build the day book (किर्दवही) sheet over all entries.
///
/// `on` is the export date stamped into the file label; it carries no other
/// meaning.
pub fn day_book_sheet(entries: &[Entry], on: NaiveDate) -> ExportSheet {
    let sorted = sort_chronological(entries.to_vec());
    let groups = group_by_date(&sorted);
    ExportSheet {
        sheet_name: "किर्दवही नोंदी".to_string(),
        file_stem: format!("किर्दवही_नोंदी_{}", format_label_date(on)),
        headers: DAY_BOOK_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: day_book_rows(&groups),
    }
}

/// Build a single account's ledger sheet.
///
/// `entries` should already be scoped to the account; `account_name` is the
/// display name used in the sheet and file labels.
pub fn account_ledger_sheet(
    entries: &[Entry],
    khate_number: &str,
    account_name: &str,
    on: NaiveDate,
) -> ExportSheet {
    let sorted = sort_chronological(entries.to_vec());
    let label = format!("खाते_{khate_number}_{account_name}");
    ExportSheet {
        sheet_name: label.clone(),
        file_stem: format!("{label}_{}", format_label_date(on)),
        headers: ACCOUNT_LEDGER_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: account_ledger_rows(&sorted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::per_account_totals;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, on: NaiveDate, amount: &str, entry_type: EntryType) -> Entry {
        Entry {
            id: id.to_string(),
            date: on,
            account_number: "12".to_string(),
            receipt_number: None,
            details: format!("entry {id}"),
            amount: amount.parse().unwrap(),
            entry_type,
            created_at: None,
        }
    }

    #[test]
    fn day_book_pairs_rows_and_blanks_the_short_side() {
        let entries = vec![
            entry("j1", date(2024, 1, 5), "100", EntryType::Jama),
            entry("j2", date(2024, 1, 5), "25", EntryType::Jama),
            entry("n1", date(2024, 1, 5), "40", EntryType::Nave),
        ];
        let sheet = day_book_sheet(&entries, date(2024, 1, 31));

        // 2 paired rows + totals + balance + separator
        assert_eq!(sheet.rows.len(), 5);
        let second = &sheet.rows[1];
        assert_eq!(second[4], "25.00");
        // nave side of the second paired row is all blank
        assert!(second[5..].iter().all(|cell| cell.is_empty()));

        let totals_row = &sheet.rows[2];
        assert_eq!(totals_row[3], "एकूण:");
        assert_eq!(totals_row[4], "125.00");
        assert_eq!(totals_row[9], "40.00");

        let balance_row = &sheet.rows[3];
        assert_eq!(balance_row[8], "शिल्लक:");
        assert_eq!(balance_row[9], "₹85.00");

        assert!(sheet.rows[4].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn day_book_one_sided_date_leaves_nave_cells_blank() {
        let entries = vec![
            entry("j1", date(2024, 1, 5), "100", EntryType::Jama),
            entry("j2", date(2024, 1, 5), "50", EntryType::Jama),
        ];
        let sheet = day_book_sheet(&entries, date(2024, 1, 31));
        for row in &sheet.rows[0..2] {
            assert!(row[5..].iter().all(|cell| cell.is_empty()));
        }
        let totals_row = &sheet.rows[2];
        assert_eq!(totals_row[9], "0.00");
        let balance_row = &sheet.rows[3];
        assert_eq!(balance_row[9], "₹150.00");
    }

    #[test]
    fn day_book_separates_dates_and_stamps_labels() {
        let entries = vec![
            entry("a", date(2024, 1, 7), "10", EntryType::Jama),
            entry("b", date(2024, 1, 5), "20", EntryType::Nave),
        ];
        let sheet = day_book_sheet(&entries, date(2024, 3, 9));
        assert_eq!(sheet.sheet_name, "किर्दवही नोंदी");
        assert_eq!(sheet.file_stem, "किर्दवही_नोंदी_09-03-2024");
        // each date contributes entry row + totals + balance + separator
        assert_eq!(sheet.rows.len(), 8);
        // first data row is the earlier date
        assert_eq!(sheet.rows[0][5], "05/01/2024");
        assert_eq!(sheet.rows[4][0], "07/01/2024");
    }

    #[test]
    fn missing_receipt_renders_as_dash() {
        let with_receipt = Entry {
            receipt_number: Some("प-१२".to_string()),
            ..entry("a", date(2024, 1, 5), "10", EntryType::Jama)
        };
        let blank_receipt = Entry {
            receipt_number: Some("  ".to_string()),
            ..entry("b", date(2024, 1, 5), "10", EntryType::Jama)
        };
        let sheet = day_book_sheet(&[with_receipt, blank_receipt], date(2024, 1, 5));
        assert_eq!(sheet.rows[0][2], "प-१२");
        assert_eq!(sheet.rows[1][2], "-");
    }

    #[test]
    fn account_ledger_round_trips_its_totals() {
        let entries = vec![
            entry("a", date(2024, 1, 5), "100.10", EntryType::Jama),
            entry("b", date(2024, 1, 5), "40.05", EntryType::Nave),
            entry("c", date(2024, 1, 9), "9.95", EntryType::Jama),
        ];
        let sheet = account_ledger_sheet(&entries, "12", "Ram", date(2024, 2, 1));

        // 3 entry rows + totals + balance
        assert_eq!(sheet.rows.len(), 5);
        let entry_rows = &sheet.rows[..3];
        let jama_sum: BigDecimal = entry_rows
            .iter()
            .filter(|r| !r[3].is_empty())
            .map(|r| r[3].parse::<BigDecimal>().unwrap())
            .sum();
        let nave_sum: BigDecimal = entry_rows
            .iter()
            .filter(|r| !r[4].is_empty())
            .map(|r| r[4].parse::<BigDecimal>().unwrap())
            .sum();

        let expected = per_account_totals(&entries, "12");
        assert_eq!(jama_sum, expected.jama_total);
        assert_eq!(nave_sum, expected.nave_total);

        assert_eq!(sheet.rows[3][2], "एकूण:");
        assert_eq!(sheet.rows[3][3], "110.05");
        assert_eq!(sheet.rows[3][4], "40.05");
        assert_eq!(sheet.rows[4][2], "शिल्लक:");
        assert_eq!(sheet.rows[4][4], "₹70.00");

        assert_eq!(sheet.sheet_name, "खाते_12_Ram");
        assert_eq!(sheet.file_stem, "खाते_12_Ram_01-02-2024");
    }

    #[test]
    fn export_is_deterministic() {
        let entries = vec![
            entry("a", date(2024, 1, 5), "100", EntryType::Jama),
            entry("b", date(2024, 1, 7), "40", EntryType::Nave),
        ];
        let first = day_book_sheet(&entries, date(2024, 2, 1));
        let second = day_book_sheet(&entries, date(2024, 2, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_only_summary_rows() {
        let day_book = day_book_sheet(&[], date(2024, 1, 1));
        assert!(day_book.rows.is_empty());

        let ledger = account_ledger_sheet(&[], "12", "Ram", date(2024, 1, 1));
        assert_eq!(ledger.rows.len(), 2);
        assert_eq!(ledger.rows[0][3], "0.00");
        assert_eq!(ledger.rows[1][4], "₹0.00");
    }
}
