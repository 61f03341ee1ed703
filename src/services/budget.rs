//! Budget service
//!
//! Setting and reading category ceilings, reporting spending against them,
//! and the enforcement check run before a new transaction is accepted.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{validate_budget, BudgetStatus, Budgets, Money, Transaction};
use crate::storage::{CollectionKind, Storage};

/// Outcome of checking a candidate amount against a ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCheck {
    /// Spending after the candidate stays at or below the ceiling
    Within { projected: Money },
    /// Spending after the candidate would pass the ceiling
    Exceeded { ceiling: Money, projected: Money },
}

impl BudgetCheck {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    pub fn projected(&self) -> Money {
        match self {
            Self::Within { projected } | Self::Exceeded { projected, .. } => *projected,
        }
    }
}

/// Total expenses in a category as a positive amount
///
/// Income recorded under the same category name does not offset spending.
pub fn category_spending(transactions: &[Transaction], category: &str) -> Money {
    -transactions
        .iter()
        .filter(|t| t.category == category && t.is_expense())
        .map(|t| t.amount)
        .sum::<Money>()
}

/// Decide whether adding `candidate` to `category` would exceed `ceiling`
///
/// Only expenses count toward a budget. A non-negative candidate never
/// exceeds; an expense candidate exceeds when existing spending plus its
/// magnitude is strictly greater than the ceiling.
pub fn check_budget(
    transactions: &[Transaction],
    category: &str,
    candidate: Money,
    ceiling: Money,
) -> BudgetCheck {
    let spent = category_spending(transactions, category);

    if !candidate.is_negative() {
        return BudgetCheck::Within { projected: spent };
    }

    let projected = spent + candidate.abs();
    if projected > ceiling {
        BudgetCheck::Exceeded { ceiling, projected }
    } else {
        BudgetCheck::Within { projected }
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or overwrite) the ceiling for a category and persist
    pub fn set(&self, category: &str, ceiling: Money) -> FinanceResult<()> {
        validate_budget(category, ceiling).map_err(|e| FinanceError::Validation(e.to_string()))?;

        let previous = self.storage.budgets.upsert(category.to_string(), ceiling)?;
        self.storage.save(CollectionKind::Budgets)?;

        match previous {
            Some(old) => tracing::info!(%category, %old, new = %ceiling, "budget updated"),
            None => tracing::info!(%category, %ceiling, "budget created"),
        }

        Ok(())
    }

    /// Read-only snapshot of every budget
    pub fn all(&self) -> FinanceResult<Budgets> {
        self.storage.budgets.get_all()
    }

    /// Ceiling for one category
    pub fn get(&self, category: &str) -> FinanceResult<Option<Money>> {
        self.storage.budgets.get(category)
    }

    /// Check a candidate amount against the category's budget, if it has one
    pub fn check(&self, category: &str, candidate: Money) -> FinanceResult<Option<BudgetCheck>> {
        let Some(ceiling) = self.storage.budgets.get(category)? else {
            return Ok(None);
        };

        let transactions = self.storage.transactions.get_all()?;
        Ok(Some(check_budget(&transactions, category, candidate, ceiling)))
    }

    /// Spending against every budget, ordered by category
    pub fn status(&self) -> FinanceResult<Vec<BudgetStatus>> {
        let transactions = self.storage.transactions.get_all()?;

        Ok(self
            .all()?
            .into_iter()
            .map(|(category, ceiling)| BudgetStatus {
                spent: category_spending(&transactions, &category),
                category,
                ceiling,
            })
            .collect())
    }
}
