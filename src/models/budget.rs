//! Budget model
//!
//! A budget is a spending ceiling for one category. Budgets are kept as a
//! mapping from category name (case-sensitive) to ceiling.

use std::collections::BTreeMap;

use thiserror::Error;

use super::money::Money;

/// Category name -> ceiling
pub type Budgets = BTreeMap<String, Money>;

/// Validation errors for budget entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetValidationError {
    #[error("Category is required")]
    EmptyCategory,
    #[error("Budget amount must be positive, got {0}")]
    NonPositiveCeiling(Money),
    #[error("Budget amount is too large: {0}")]
    CeilingTooLarge(Money),
}

/// Check a category/ceiling pair before it is stored
pub fn validate_budget(category: &str, ceiling: Money) -> Result<(), BudgetValidationError> {
    if category.trim().is_empty() {
        return Err(BudgetValidationError::EmptyCategory);
    }
    if !ceiling.is_positive() {
        return Err(BudgetValidationError::NonPositiveCeiling(ceiling));
    }
    if !ceiling.is_within_limit() {
        return Err(BudgetValidationError::CeilingTooLarge(ceiling));
    }
    Ok(())
}

/// Spending against one category's ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub ceiling: Money,
    /// Total expenses recorded in the category, as a positive amount
    pub spent: Money,
}

impl BudgetStatus {
    /// Ceiling minus spending; negative once the category is over budget
    pub fn remaining(&self) -> Money {
        self.ceiling - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget("Food", Money::from_cents(20000)).is_ok());
        assert_eq!(
            validate_budget("  ", Money::from_cents(100)),
            Err(BudgetValidationError::EmptyCategory)
        );
        assert_eq!(
            validate_budget("Food", Money::zero()),
            Err(BudgetValidationError::NonPositiveCeiling(Money::zero()))
        );
        assert!(validate_budget("Food", Money::from_cents(-1)).is_err());
        assert_eq!(
            validate_budget("Food", Money::from_cents(i64::MAX)),
            Err(BudgetValidationError::CeilingTooLarge(Money::from_cents(i64::MAX)))
        );
    }

    #[test]
    fn test_status_remaining() {
        let status = BudgetStatus {
            category: "Food".into(),
            ceiling: Money::from_cents(20000),
            spent: Money::from_cents(25000),
        };
        assert_eq!(status.remaining(), Money::from_cents(-5000));
        assert!(status.is_over());
    }

    #[test]
    fn test_budgets_serialize_as_object() {
        let mut budgets = Budgets::new();
        budgets.insert("Food".into(), Money::from_cents(20000));
        let json = serde_json::to_string(&budgets).unwrap();
        assert_eq!(json, r#"{"Food":200.0}"#);
    }
}
