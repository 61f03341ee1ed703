//! Core data models for the finance tracker
//!
//! Transactions, budgets and the integer Money type they are built on.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{validate_budget, BudgetStatus, BudgetValidationError, Budgets};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionInput, TransactionValidationError};
