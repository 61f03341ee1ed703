//! Finance Tracker - personal income/expense tracking with category budgets
//!
//! This library provides the core functionality behind the `finance` binary.
//! Transactions and budgets are kept in two JSON files; new expenses are
//! checked against the ceiling set for their category before they are saved.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (budget enforcement, summaries)
//! - `interaction`: Confirmation prompts and notices supplied by the front end
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::paths::FinancePaths;
//! use finance_tracker::models::{Money, TransactionInput};
//! use finance_tracker::services::TransactionService;
//! use finance_tracker::storage::Storage;
//!
//! let storage = Storage::open(FinancePaths::new()?)?;
//! let service = TransactionService::new(&storage);
//! service.add(TransactionInput::new("2024-05-01", "Coffee", Money::from_cents(-450), "Food"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interaction;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
