//! Budget repository for JSON storage
//!
//! Manages loading and saving category ceilings to budgets.json, a JSON
//! object mapping category name to ceiling.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Budgets, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Budgets>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Budgets::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load budgets from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: Budgets = read_json(&self.path)?;
        tracing::debug!(count = file_data.len(), "loaded budgets");

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = file_data;
        Ok(())
    }

    /// Save budgets to disk, overwriting the file
    pub fn save(&self) -> Result<(), FinanceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*budgets)
    }

    /// Get the ceiling for a category
    pub fn get(&self, category: &str) -> Result<Option<Money>, FinanceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(category).copied())
    }

    /// Snapshot of every budget
    pub fn get_all(&self) -> Result<Budgets, FinanceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Insert or overwrite a ceiling, returning the previous one
    pub fn upsert(&self, category: String, ceiling: Money) -> Result<Option<Money>, FinanceError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.insert(category, ceiling))
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FinanceError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.len())
    }
}
