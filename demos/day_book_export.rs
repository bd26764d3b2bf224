//! Day book aggregation and spreadsheet export example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use khatabook_core::{
    aggregation, AdminGate, EntryDraft, LedgerBook, MemoryStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📒 Khatabook Core - Day Book Export Example\n");

    let token = AdminGate::new("tzpmv", "tzpmv97")
        .authorize("tzpmv", "tzpmv97")
        .ok_or("admin credentials rejected")?;

    let mut book = LedgerBook::new(MemoryStore::new());
    book.create_account(&token, "12", "Ram").await?;
    book.create_account(&token, "101", "Shala Fund").await?;

    let rows: [(&str, u32, &str, i32); 5] = [
        ("12", 5, "जमा", 1000),
        ("12", 5, "नावे", 250),
        ("101", 5, "जमा", 5000),
        ("101", 9, "नावे", 1200),
        ("12", 9, "जमा", 300),
    ];
    for (khate, day, side, amount) in rows {
        let draft = if side == "जमा" {
            EntryDraft::jama(
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                khate.to_string(),
                format!("खाते {khate}\nentry"),
                BigDecimal::from(amount),
            )
        } else {
            EntryDraft::nave(
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                khate.to_string(),
                format!("खाते {khate}\nentry"),
                BigDecimal::from(amount),
            )
        };
        book.create_entry(&token, draft).await?;
    }

    // Per-date totals, derived from a fresh snapshot
    println!("📅 Daily totals:");
    let entries = book.list_entries().await?;
    let groups = aggregation::group_by_date(&entries);
    for (date, totals) in aggregation::per_date_totals(&groups) {
        println!(
            "  {}: जमा ₹{}  नावे ₹{}  शिल्लक ₹{}",
            date.format("%d/%m/%Y"),
            totals.jama_total,
            totals.nave_total,
            totals.displayed_balance()
        );
    }

    // The full two-column day book, ready for a spreadsheet writer
    let sheet = book
        .day_book_export(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .await?;
    println!("\n🧾 Sheet '{}' → {}.xlsx", sheet.sheet_name, sheet.file_stem);
    println!("  {}", sheet.headers.join(" | "));
    for row in &sheet.rows {
        println!("  {}", row.join(" | "));
    }

    // One account's ledger view
    let sheet = book
        .account_ledger_export("12", NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .await?;
    println!("\n🧾 Sheet '{}'", sheet.sheet_name);
    for row in &sheet.rows {
        println!("  {}", row.join(" | "));
    }

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
