//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod summary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::handle_export_command;
pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
