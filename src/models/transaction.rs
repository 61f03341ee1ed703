//! Transaction model
//!
//! A transaction is one income or expense event. Positive amounts are
//! income, negative amounts are expenses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::TransactionId;
use super::money::Money;

/// Validation errors for transaction fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionValidationError {
    #[error("Date is required")]
    EmptyDate,
    #[error("Description is required")]
    EmptyDescription,
    #[error("Category is required")]
    EmptyCategory,
    #[error("Amount cannot be zero")]
    ZeroAmount,
    #[error("Amount is too large: {0}")]
    AmountTooLarge(Money),
}

/// User-supplied fields for a new or edited transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    /// Free-form date string (not checked for calendar correctness)
    pub date: String,
    pub description: String,
    pub amount: Money,
    pub category: String,
}

impl TransactionInput {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Check that every text field is non-blank and the amount is non-zero
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.date.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDate);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub date: String,

    pub description: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    pub category: String,
}

impl Transaction {
    /// Create a transaction with a newly generated id
    pub fn new(input: TransactionInput) -> Self {
        Self::with_id(TransactionId::new(), input)
    }

    /// Build a transaction that keeps an existing id
    pub fn with_id(id: TransactionId, input: TransactionInput) -> Self {
        Self {
            id,
            date: input.date,
            description: input.description,
            amount: input.amount,
            category: input.category,
        }
    }

    /// The editable fields of this transaction
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            date: self.date.clone(),
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Validate the stored fields
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        self.to_input().validate()
    }
}
