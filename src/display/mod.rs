//! Display formatting for terminal output
//!
//! Plain-text renderers for transactions, budgets and summaries. Amounts are
//! printed with the currency symbol from the user's settings.

pub mod budget;
pub mod summary;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_status};
pub use summary::{format_category_breakdown, format_summary};
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
