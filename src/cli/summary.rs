//! Summary CLI command

use crate::config::settings::Settings;
use crate::display::summary::{format_category_breakdown, format_summary};
use crate::error::FinanceResult;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Print income, expenses and balance, optionally broken down per category
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    by_category: bool,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    print!("{}", format_summary(&service.summarize()?, symbol));

    if by_category {
        let breakdown = service.category_breakdown()?;
        if !breakdown.is_empty() {
            println!();
            print!("{}", format_category_breakdown(&breakdown, symbol));
        }
    }

    Ok(())
}
