//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, budget enforcement and summaries. Every mutating
//! operation persists its collection before returning.

pub mod budget;
pub mod summary;
pub mod transaction;

pub use budget::{check_budget, BudgetCheck, BudgetService};
pub use summary::Summary;
pub use transaction::TransactionService;
