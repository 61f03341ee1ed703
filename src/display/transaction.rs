//! Transaction display formatting
//!
//! Numbered listings (the numbers double as positions for `edit`/`delete`)
//! and a detail view.

use crate::models::Transaction;

/// Format one numbered list line
pub fn format_transaction_row(position: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}. Date: {}, Description: {}, Amount: {}, Category: {}  [{}]",
        position,
        txn.date,
        txn.description,
        txn.amount.format_with_symbol(symbol),
        txn.category,
        txn.id
    )
}

/// Format the whole list, numbered from 1
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, symbol));
        output.push('\n');
    }
    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, position: Option<usize>, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    if let Some(position) = position {
        output.push_str(&format!("Position:    {}\n", position));
    }
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Type:        {}\n",
        if txn.is_income() { "Income" } else { "Expense" }
    ));
    output.push_str(&format!("ID:          {}\n", txn.id.as_uuid()));

    output
}
