//! Storage layer for the finance tracker
//!
//! Two JSON collections, each read and written whole: the ordered
//! transaction list and the category budget map.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use std::fmt;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// The independently persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Transactions,
    Budgets,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Transactions, CollectionKind::Budgets];

    /// File name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions.json",
            Self::Budgets => "budgets.json",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transactions => write!(f, "transactions"),
            Self::Budgets => write!(f, "budgets"),
        }
    }
}

/// Owns both repositories; constructed once and passed to services by reference
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Create storage and load both collections
    pub fn open(paths: FinancePaths) -> Result<Self, FinanceError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load one collection from disk
    pub fn load(&self, kind: CollectionKind) -> Result<(), FinanceError> {
        match kind {
            CollectionKind::Transactions => self.transactions.load(),
            CollectionKind::Budgets => self.budgets.load(),
        }
    }

    /// Write one collection to disk
    pub fn save(&self, kind: CollectionKind) -> Result<(), FinanceError> {
        match kind {
            CollectionKind::Transactions => self.transactions.save(),
            CollectionKind::Budgets => self.budgets.save(),
        }
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), FinanceError> {
        for kind in CollectionKind::ALL {
            self.load(kind)?;
        }
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        for kind in CollectionKind::ALL {
            self.save(kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionInput};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_collection_files() {
        assert_eq!(CollectionKind::Transactions.file_name(), "transactions.json");
        assert_eq!(CollectionKind::Budgets.file_name(), "budgets.json");
        assert_eq!(CollectionKind::Budgets.to_string(), "budgets");
    }

    #[test]
    fn test_save_all_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths.clone()).unwrap();

        storage
            .transactions
            .push(Transaction::new(TransactionInput::new(
                "2024-02-02",
                "Books",
                Money::from_cents(-2599),
                "Education",
            )))
            .unwrap();
        storage
            .budgets
            .upsert("Education".into(), Money::from_cents(10000))
            .unwrap();
        storage.save_all().unwrap();

        let reopened = Storage::open(paths).unwrap();
        assert_eq!(
            reopened.transactions.get_all().unwrap(),
            storage.transactions.get_all().unwrap()
        );
        assert_eq!(
            reopened.budgets.get_all().unwrap(),
            storage.budgets.get_all().unwrap()
        );
    }

    #[test]
    fn test_collections_load_independently() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .budgets
            .upsert("Food".into(), Money::from_cents(500))
            .unwrap();
        storage.save(CollectionKind::Budgets).unwrap();

        assert!(!storage.paths().transactions_file().exists());
        storage.load(CollectionKind::Transactions).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_ids_for_legacy_records_are_stable_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.transactions_file(),
            r#"[{"date": "2024-04-01", "description": "Rent", "amount": -900, "category": "Home"}]"#,
        )
        .unwrap();

        let first = Storage::open(paths.clone()).unwrap();
        let shown = first.transactions.get_at(0).unwrap().unwrap().id;

        let second = Storage::open(paths).unwrap();
        let found = second.transactions.find_by_short_id(&shown.to_string()).unwrap();
        assert_eq!(found.map(|t| t.id), Some(shown));
    }
}
