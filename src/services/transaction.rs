//! Transaction service
//!
//! Provides business logic for transaction management: validated add with
//! budget enforcement, in-place edits, confirmed deletes, and summaries.

use std::collections::BTreeMap;

use crate::error::{FinanceError, FinanceResult};
use crate::interaction::Interaction;
use crate::models::{Transaction, TransactionId, TransactionInput};
use crate::storage::{CollectionKind, Storage};

use super::budget::{category_spending, BudgetCheck, BudgetService};
use super::summary::{category_breakdown, Summary};

/// Prompt shown before a transaction is removed
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

/// Reject a change whose income, expense or balance totals would overflow
fn ensure_totals_fit(transactions: &[Transaction]) -> FinanceResult<()> {
    Summary::checked_of(transactions).map(|_| ()).ok_or_else(|| {
        FinanceError::Validation("Totals would exceed the largest supported amount".into())
    })
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, enforce the category budget, append and persist
    pub fn add(&self, input: TransactionInput) -> FinanceResult<Transaction> {
        input
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let budgets = BudgetService::new(self.storage);
        if let Some(BudgetCheck::Exceeded { ceiling, projected }) =
            budgets.check(&input.category, input.amount)?
        {
            tracing::warn!(
                category = %input.category,
                %ceiling,
                %projected,
                "transaction refused: budget exceeded"
            );
            return Err(FinanceError::BudgetExceeded {
                category: input.category,
                ceiling,
                projected,
            });
        }

        let txn = Transaction::new(input);
        let mut prospective = self.storage.transactions.get_all()?;
        prospective.push(txn.clone());
        ensure_totals_fit(&prospective)?;

        self.storage.transactions.push(txn.clone())?;
        if let Err(e) = self.storage.save(CollectionKind::Transactions) {
            self.storage.transactions.delete(txn.id)?;
            return Err(e);
        }

        tracing::info!(id = %txn.id, amount = %txn.amount, category = %txn.category, "transaction added");
        Ok(txn)
    }

    /// Replace every field of an existing transaction and persist
    ///
    /// Budgets are not enforced on edits; an edit that takes a category
    /// over its ceiling is logged and allowed.
    pub fn update(&self, id: TransactionId, input: TransactionInput) -> FinanceResult<Transaction> {
        input
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let txn = Transaction::with_id(id, input);
        let mut prospective = self.storage.transactions.get_all()?;
        if let Some(slot) = prospective.iter_mut().find(|t| t.id == id) {
            *slot = txn.clone();
        }
        ensure_totals_fit(&prospective)?;

        let before = self
            .storage
            .transactions
            .replace(txn.clone())?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        if let Err(e) = self.storage.save(CollectionKind::Transactions) {
            self.storage.transactions.replace(before)?;
            return Err(e);
        }

        if let Some(ceiling) = self.storage.budgets.get(&txn.category)? {
            let spent = category_spending(&self.storage.transactions.get_all()?, &txn.category);
            if spent > ceiling {
                tracing::warn!(
                    id = %txn.id,
                    category = %txn.category,
                    %ceiling,
                    %spent,
                    "edit leaves category over budget"
                );
            }
        }

        tracing::info!(
            id = %txn.id,
            before = %before.amount,
            after = %txn.amount,
            "transaction updated"
        );
        Ok(txn)
    }

    /// Remove a transaction after the user confirms
    ///
    /// Returns `Ok(None)` when the user declines; nothing is changed then.
    pub fn remove(
        &self,
        id: TransactionId,
        interaction: &mut dyn Interaction,
    ) -> FinanceResult<Option<Transaction>> {
        let Some(position) = self.storage.transactions.position_of(id)? else {
            return Err(FinanceError::transaction_not_found(id.to_string()));
        };

        if !interaction.confirm(DELETE_PROMPT) {
            tracing::debug!(%id, "delete declined");
            return Ok(None);
        }

        let removed = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        if let Err(e) = self.storage.save(CollectionKind::Transactions) {
            self.storage.transactions.insert(position, removed)?;
            return Err(e);
        }

        tracing::info!(%id, "transaction deleted");
        Ok(Some(removed))
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Resolve a user-supplied reference to a transaction
    ///
    /// Accepts a 1-based list position, a full UUID, or a short
    /// `txn-xxxxxxxx` display ID.
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        let identifier = identifier.trim();

        if let Ok(position) = identifier.parse::<usize>() {
            return match position.checked_sub(1) {
                Some(index) => self.storage.transactions.get_at(index),
                None => Ok(None),
            };
        }

        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        self.storage.transactions.find_by_short_id(identifier)
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn resolve(&self, identifier: &str) -> FinanceResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::transaction_not_found(identifier))
    }

    /// All transactions in display order
    pub fn list(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Count transactions
    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.transactions.count()
    }

    /// Total income, total expenses and balance
    pub fn summarize(&self) -> FinanceResult<Summary> {
        Ok(Summary::of(&self.storage.transactions.get_all()?))
    }

    /// Totals per category
    pub fn category_breakdown(&self) -> FinanceResult<BTreeMap<String, Summary>> {
        Ok(category_breakdown(&self.storage.transactions.get_all()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::interaction::ScriptedInteraction;
    use crate::models::Money;
    use crate::services::BudgetService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(description: &str, cents: i64, category: &str) -> TransactionInput {
        TransactionInput::new(
            "2024-03-15",
            description,
            Money::from_cents(cents),
            category,
        )
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.add(input("Paycheck", 250000, "Salary")).unwrap();

        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(txn.date, "2024-03-15");
        assert_eq!(txn.description, "Paycheck");
        assert_eq!(txn.amount, Money::from_cents(250000));
        assert_eq!(txn.category, "Salary");
        assert_eq!(service.list().unwrap(), vec![txn]);
    }

    #[test]
    fn test_add_persists_immediately() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        service.add(input("Coffee", -350, "Food")).unwrap();

        let reopened =
            Storage::open(FinancePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(
            reopened.transactions.get_all().unwrap(),
            service.list().unwrap()
        );
    }

    #[test]
    fn test_add_rejects_invalid_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let cases = vec![
            TransactionInput::new("", "Lunch", Money::from_cents(-1000), "Food"),
            TransactionInput::new("2024-03-15", "  ", Money::from_cents(-1000), "Food"),
            TransactionInput::new("2024-03-15", "Lunch", Money::from_cents(-1000), ""),
            TransactionInput::new("2024-03-15", "Lunch", Money::zero(), "Food"),
        ];

        for case in cases {
            let err = service.add(case).unwrap_err();
            assert!(err.is_validation(), "unexpected error: {}", err);
        }

        assert_eq!(service.count().unwrap(), 0);
        assert!(!storage.paths().transactions_file().exists());
    }

    #[test]
    fn test_add_refused_when_budget_exceeded() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        BudgetService::new(&storage)
            .set("Food", Money::from_cents(20000))
            .unwrap();

        service.add(input("Groceries", -15000, "Food")).unwrap();
        let err = service.add(input("Dinner", -6000, "Food")).unwrap_err();

        match err {
            FinanceError::BudgetExceeded {
                category,
                ceiling,
                projected,
            } => {
                assert_eq!(category, "Food");
                assert_eq!(ceiling, Money::from_cents(20000));
                assert_eq!(projected, Money::from_cents(21000));
            }
            other => panic!("expected budget exceeded, got {}", other),
        }
        assert_eq!(service.count().unwrap(), 1);

        // Still room for something smaller
        service.add(input("Snack", -5000, "Food")).unwrap();
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_budget_ignores_other_categories_and_income() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        BudgetService::new(&storage)
            .set("Food", Money::from_cents(1000))
            .unwrap();

        service.add(input("Rent", -100000, "Housing")).unwrap();
        service.add(input("Refund", 50000, "Food")).unwrap();
        service.add(input("Bread", -1000, "Food")).unwrap();
        assert_eq!(service.count().unwrap(), 3);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let first = service.add(input("First", 100, "A")).unwrap();
        let second = service.add(input("Second", 200, "B")).unwrap();
        let third = service.add(input("Third", 300, "C")).unwrap();

        let updated = service
            .update(second.id, input("Second (edited)", -250, "B"))
            .unwrap();

        assert_eq!(updated.id, second.id);
        let all = service.list().unwrap();
        assert_eq!(all, vec![first, updated, third]);
    }

    #[test]
    fn test_update_skips_budget_enforcement() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        BudgetService::new(&storage)
            .set("Food", Money::from_cents(1000))
            .unwrap();

        let txn = service.add(input("Lunch", -500, "Food")).unwrap();
        let updated = service
            .update(txn.id, input("Feast", -50000, "Food"))
            .unwrap();
        assert_eq!(updated.amount, Money::from_cents(-50000));
    }

    #[test]
    fn test_update_validation_and_missing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service.add(input("Lunch", -500, "Food")).unwrap();

        let err = service.update(txn.id, input("Lunch", 0, "Food")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(txn.id).unwrap().unwrap(), txn);

        let err = service
            .update(TransactionId::new(), input("Ghost", 1, "Food"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_confirmed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let first = service.add(input("First", 100, "A")).unwrap();
        let second = service.add(input("Second", 200, "B")).unwrap();
        let third = service.add(input("Third", 300, "C")).unwrap();

        let mut interaction = ScriptedInteraction::new([true]);
        let removed = service.remove(second.id, &mut interaction).unwrap();

        assert_eq!(removed, Some(second));
        assert_eq!(interaction.prompts, vec![DELETE_PROMPT]);
        assert_eq!(service.list().unwrap(), vec![first, third]);
    }

    #[test]
    fn test_update_and_remove_persist_immediately() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let keep = service.add(input("Keep", 100, "A")).unwrap();
        let edit = service.add(input("Edit", 200, "B")).unwrap();
        let drop = service.add(input("Drop", 300, "C")).unwrap();
        let reopen =
            || Storage::open(FinancePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let edited = service
            .update(edit.id, input("Edited", -250, "B"))
            .unwrap();
        assert_eq!(
            reopen().transactions.get(edit.id).unwrap(),
            Some(edited.clone())
        );

        let mut interaction = ScriptedInteraction::new([true]);
        service.remove(drop.id, &mut interaction).unwrap();
        assert_eq!(
            reopen().transactions.get_all().unwrap(),
            vec![keep, edited]
        );
    }

    #[test]
    fn test_failed_save_leaves_memory_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let first = service.add(input("First", 100, "A")).unwrap();
        let second = service.add(input("Second", 200, "B")).unwrap();

        // A plain file where the data directory should be makes every write fail
        let data_dir = storage.paths().data_dir();
        std::fs::remove_dir_all(&data_dir).unwrap();
        std::fs::write(&data_dir, "").unwrap();

        assert!(service.add(input("Third", 300, "C")).is_err());
        assert!(service.update(first.id, input("Changed", 1, "A")).is_err());
        let mut interaction = ScriptedInteraction::new([true]);
        assert!(service.remove(first.id, &mut interaction).is_err());

        assert_eq!(service.list().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_add_rejects_totals_that_would_overflow() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .push(Transaction::new(input("Windfall", i64::MAX - 50, "Luck")))
            .unwrap();
        let service = TransactionService::new(&storage);

        let err = service.add(input("One more", 100, "Luck")).unwrap_err();
        assert!(err.is_validation(), "unexpected error: {}", err);
        assert_eq!(service.count().unwrap(), 1);
        assert!(service.summarize().unwrap().income.is_positive());

        service.add(input("Small", 50, "Luck")).unwrap();
    }

    #[test]
    fn test_add_rejects_oversized_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .add(input("Too much", Money::MAX_CENTS + 1, "Luck"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_remove_declined() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service.add(input("Keep me", 100, "A")).unwrap();

        let mut interaction = ScriptedInteraction::new([false]);
        assert_eq!(service.remove(txn.id, &mut interaction).unwrap(), None);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_remove_missing_does_not_prompt() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut interaction = ScriptedInteraction::new([true]);
        let err = service
            .remove(TransactionId::new(), &mut interaction)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(interaction.prompts.is_empty());
    }

    #[test]
    fn test_find_by_position_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let first = service.add(input("First", 100, "A")).unwrap();
        let second = service.add(input("Second", 200, "B")).unwrap();

        assert_eq!(service.find("1").unwrap(), Some(first.clone()));
        assert_eq!(service.find("2").unwrap(), Some(second.clone()));
        assert_eq!(service.find("0").unwrap(), None);
        assert_eq!(service.find("3").unwrap(), None);
        assert_eq!(
            service.find(&second.id.as_uuid().to_string()).unwrap(),
            Some(second.clone())
        );
        assert_eq!(service.find(&first.id.to_string()).unwrap(), Some(first));
        assert!(service.resolve("nonsense").unwrap_err().is_not_found());
    }

    #[test]
    fn test_summarize() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        service.add(input("Pay", 10000, "Work")).unwrap();
        service.add(input("Food", -4000, "Food")).unwrap();
        service.add(input("Bus", -1000, "Travel")).unwrap();

        let summary = service.summarize().unwrap();
        assert_eq!(summary.income, Money::from_cents(10000));
        assert_eq!(summary.expenses, Money::from_cents(-5000));
        assert_eq!(summary.balance, Money::from_cents(5000));

        let breakdown = service.category_breakdown().unwrap();
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown["Travel"].expenses, Money::from_cents(-1000));
    }
}
