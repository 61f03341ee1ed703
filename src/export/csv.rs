//! CSV export of transactions

use std::io::Write;

use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::Transaction;

/// One exported row; amounts are written with two decimals
#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    id: String,
    date: &'a str,
    description: &'a str,
    category: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_uuid().to_string(),
            date: &txn.date,
            description: &txn.description,
            category: &txn.category,
            amount: txn.amount.format_with_symbol(""),
        }
    }
}

/// Export transactions in display order, with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer.write_record(["id", "date", "description", "category", "amount"])?;
    }
    for txn in transactions {
        csv_writer.serialize(TransactionRow::from(txn))?;
    }

    csv_writer
        .flush()
        .map_err(|e| crate::error::FinanceError::Export(e.to_string()))?;

    Ok(transactions.len())
}
