//! Budget CLI commands
//!
//! Implements CLI commands for setting and reviewing category ceilings.

use clap::Subcommand;

use crate::cli::transaction::parse_amount;
use crate::config::settings::Settings;
use crate::display::budget::{format_budget_list, format_budget_status};
use crate::error::FinanceResult;
use crate::interaction::Interaction;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending ceiling for a category
    Set {
        /// Category name
        category: String,
        /// Ceiling amount (e.g., "200" or "150.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List all budgets
    List,
    /// Show spending against each budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
    interaction: &mut dyn Interaction,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let ceiling = parse_amount(&amount)?;
            service.set(&category, ceiling)?;
            interaction.notify(&format!(
                "Budget for '{}' set to {}",
                category,
                ceiling.format_with_symbol(symbol)
            ));
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(&service.all()?, symbol));
        }

        BudgetCommands::Status => {
            print!("{}", format_budget_status(&service.status()?, symbol));
        }
    }

    Ok(())
}
