//! Export functionality
//!
//! Writes the transaction list to CSV for use in spreadsheets.

pub mod csv;

pub use self::csv::export_transactions_csv;
