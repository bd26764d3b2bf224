//! Basic ledger book usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use khatabook_core::{AdminGate, EntryDraft, LedgerBook, MemoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📒 Khatabook Core - Basic Ledger Example\n");

    // Authorization is an explicit capability, not ambient state
    let gate = AdminGate::new("tzpmv", "tzpmv97");
    let token = gate
        .authorize("tzpmv", "tzpmv97")
        .ok_or("admin credentials rejected")?;

    // Create a new ledger book with in-memory storage
    let store = MemoryStore::new();
    let mut book = LedgerBook::new(store);

    // 1. Open accounts
    println!("📇 Opening accounts...");
    let ram = book.create_account(&token, "12", "Ram").await?;
    let fund = book.create_account(&token, "101", "Shala Fund").await?;
    for account in book.list_accounts().await? {
        println!("  ✓ खाते {} - {}", account.khate_number, account.name);
    }
    println!();

    // 2. Record entries
    println!("💰 Recording entries...\n");

    book.create_entry(
        &token,
        EntryDraft::jama(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ram.khate_number.clone(),
            "Ram\nschool fee received".to_string(),
            BigDecimal::from(1500),
        )
        .with_receipt("प-१".to_string()),
    )
    .await?;
    println!("  ✓ जमा ₹1500 against खाते 12");

    book.create_entry(
        &token,
        EntryDraft::nave(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ram.khate_number.clone(),
            "Ram\nnotebooks purchased".to_string(),
            "425.50".parse()?,
        ),
    )
    .await?;
    println!("  ✓ नावे ₹425.50 against खाते 12");

    book.create_entry(
        &token,
        EntryDraft::jama(
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            fund.khate_number.clone(),
            "Shala Fund\ndonation".to_string(),
            BigDecimal::from(5000),
        ),
    )
    .await?;
    println!("  ✓ जमा ₹5000 against खाते 101");

    // 3. Account balances
    println!("\n📈 Account balances:");
    for account in book.list_accounts().await? {
        let totals = book.account_totals(&account.khate_number).await?;
        println!(
            "  {} ({}): जमा ₹{}  नावे ₹{}  शिल्लक ₹{}",
            account.name,
            account.khate_number,
            totals.jama_total,
            totals.nave_total,
            totals.displayed_balance()
        );
    }

    // 4. A mistake gets corrected, an account gets closed
    println!("\n✏️  Correcting an entry...");
    let entry = book.list_entries_for_account("12").await?.remove(1);
    book.update_entry(
        &token,
        &entry.id,
        EntryDraft::nave(
            entry.date,
            entry.account_number.clone(),
            "Ram\nnotebooks and chalk purchased".to_string(),
            "450.00".parse()?,
        ),
    )
    .await?;
    let totals = book.account_totals("12").await?;
    println!("  ✓ खाते 12 शिल्लक is now ₹{}", totals.displayed_balance());

    println!("\n🗑️  Closing खाते 101 (entries cascade first)...");
    book.delete_account(&token, &fund.id, &fund.khate_number).await?;
    println!(
        "  ✓ remaining accounts: {}",
        book.list_accounts().await?.len()
    );

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
