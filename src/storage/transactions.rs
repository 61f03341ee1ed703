//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The file
//! holds a JSON array whose order is insertion order, which is also the
//! order transactions are displayed in.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;

use crate::error::FinanceError;
use crate::models::{Money, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk record; files written before ids existed have no `id` key
#[derive(Deserialize)]
struct StoredTransaction {
    #[serde(default)]
    id: Option<TransactionId>,
    date: String,
    description: String,
    amount: Money,
    category: String,
}

impl StoredTransaction {
    fn into_transaction(self) -> (Transaction, bool) {
        let assigned = self.id.is_none();
        let txn = Transaction {
            id: self.id.unwrap_or_else(TransactionId::new),
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category,
        };
        (txn, assigned)
    }
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Transaction>>, FinanceError> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Transaction>>, FinanceError> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk, replacing whatever is in memory
    ///
    /// Records without an id are given one and the file is rewritten at once,
    /// so the ids shown to the user stay valid in later sessions.
    pub fn load(&self) -> Result<(), FinanceError> {
        let stored: Vec<StoredTransaction> = read_json(&self.path)?;

        let mut assigned = 0;
        let transactions: Vec<Transaction> = stored
            .into_iter()
            .map(|record| {
                let (txn, was_assigned) = record.into_transaction();
                assigned += usize::from(was_assigned);
                txn
            })
            .collect();
        tracing::debug!(count = transactions.len(), "loaded transactions");

        *self.write()? = transactions;

        if assigned > 0 {
            self.save()?;
            tracing::info!(assigned, "assigned ids to transactions missing one");
        }
        Ok(())
    }

    /// Save transactions to disk, overwriting the file
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get all transactions in display order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanceError> {
        Ok(self.read()?.clone())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinanceError> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    /// Get the transaction at a zero-based position
    pub fn get_at(&self, position: usize) -> Result<Option<Transaction>, FinanceError> {
        Ok(self.read()?.get(position).cloned())
    }

    /// Zero-based position of a transaction
    pub fn position_of(&self, id: TransactionId) -> Result<Option<usize>, FinanceError> {
        Ok(self.read()?.iter().position(|t| t.id == id))
    }

    /// Find the transaction whose short display ID matches
    pub fn find_by_short_id(&self, short: &str) -> Result<Option<Transaction>, FinanceError> {
        Ok(self
            .read()?
            .iter()
            .find(|t| t.id.matches_short(short))
            .cloned())
    }

    /// Append a transaction to the end of the sequence
    pub fn push(&self, txn: Transaction) -> Result<(), FinanceError> {
        self.write()?.push(txn);
        Ok(())
    }

    /// Replace the transaction with the same ID, keeping its position
    ///
    /// Returns the previous record, or `None` if no transaction has that ID.
    pub fn replace(&self, txn: Transaction) -> Result<Option<Transaction>, FinanceError> {
        let mut data = self.write()?;
        Ok(data
            .iter_mut()
            .find(|t| t.id == txn.id)
            .map(|slot| std::mem::replace(slot, txn)))
    }

    /// Put a transaction back at a zero-based position (clamped to the end)
    pub fn insert(&self, position: usize, txn: Transaction) -> Result<(), FinanceError> {
        let mut data = self.write()?;
        let position = position.min(data.len());
        data.insert(position, txn);
        Ok(())
    }

    /// Remove a transaction, shifting later ones up by one
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let mut data = self.write()?;
        Ok(data
            .iter()
            .position(|t| t.id == id)
            .map(|index| data.remove(index)))
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinanceError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionInput};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn(description: &str, cents: i64) -> Transaction {
        Transaction::new(TransactionInput::new(
            "2024-05-01",
            description,
            Money::from_cents(cents),
            "Misc",
        ))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_push_keeps_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(txn("first", 100)).unwrap();
        repo.push(txn("second", -50)).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].description, "first");
        assert_eq!(all[1].description, "second");
        assert_eq!(repo.get_at(1).unwrap().unwrap().description, "second");
        assert!(repo.get_at(2).unwrap().is_none());
    }

    #[test]
    fn test_replace_in_place() {
        let (_temp_dir, repo) = create_test_repo();
        let a = txn("a", 100);
        let b = txn("b", 200);
        let c = txn("c", 300);
        let b_id = b.id;
        repo.push(a).unwrap();
        repo.push(b).unwrap();
        repo.push(c).unwrap();

        let mut edited = repo.get(b_id).unwrap().unwrap();
        edited.description = "b2".into();
        let previous = repo.replace(edited).unwrap().unwrap();

        assert_eq!(previous.description, "b");
        assert_eq!(repo.position_of(b_id).unwrap(), Some(1));
        assert_eq!(repo.get_at(1).unwrap().unwrap().description, "b2");
    }

    #[test]
    fn test_replace_unknown_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(txn("a", 100)).unwrap();
        assert!(repo.replace(txn("ghost", 1)).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_shifts_only_positions() {
        let (_temp_dir, repo) = create_test_repo();
        let a = txn("a", 100);
        let b = txn("b", 200);
        let c = txn("c", 300);
        let (a_snapshot, b_id, c_snapshot) = (a.clone(), b.id, c.clone());
        repo.push(a).unwrap();
        repo.push(b).unwrap();
        repo.push(c).unwrap();

        let removed = repo.delete(b_id).unwrap().unwrap();
        assert_eq!(removed.description, "b");
        assert_eq!(repo.get_all().unwrap(), vec![a_snapshot, c_snapshot]);
        assert!(repo.delete(b_id).unwrap().is_none());
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let a = txn("a", 100);
        let short = a.id.to_string();
        repo.push(a).unwrap();

        assert_eq!(repo.find_by_short_id(&short).unwrap().unwrap().description, "a");
        assert!(repo.find_by_short_id("txn-00000000").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.push(txn("salary", 250000)).unwrap();
        repo.push(txn("coffee", -350)).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_load_legacy_file_without_ids() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r#"[
    {"date": "2024-01-01", "description": "Salary", "amount": 1000.0, "category": "Work"},
    {"date": "2024-01-02", "description": "Lunch", "amount": -12.5, "category": "Food"}
]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].amount, Money::from_cents(-1250));
        assert!(all[0].is_income());
        assert_ne!(all[0].id, all[1].id);
    }

    #[test]
    fn test_assigned_ids_survive_reload() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"[{"date": "2024-01-02", "description": "Lunch", "amount": -12.5, "category": "Food"}]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let shown = repo.get_at(0).unwrap().unwrap().id;
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains(&shown.as_uuid().to_string()));

        let next_session = TransactionRepository::new(path);
        next_session.load().unwrap();
        assert_eq!(
            next_session
                .find_by_short_id(&shown.to_string())
                .unwrap()
                .map(|t| t.id),
            Some(shown)
        );
    }

    #[test]
    fn test_load_with_ids_does_not_rewrite() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("transactions.json");
        repo.push(txn("salary", 250000)).unwrap();
        repo.save().unwrap();
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();

        // Any write would bump the modification time past this point
        std::thread::sleep(std::time::Duration::from_millis(20));
        TransactionRepository::new(path.clone()).load().unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_insert_restores_position() {
        let (_temp_dir, repo) = create_test_repo();
        let a = txn("a", 100);
        let b = txn("b", 200);
        let b_id = b.id;
        repo.push(a).unwrap();
        repo.push(b).unwrap();

        let removed = repo.delete(b_id).unwrap().unwrap();
        repo.insert(5, removed).unwrap();
        assert_eq!(repo.position_of(b_id).unwrap(), Some(1));
    }
}
