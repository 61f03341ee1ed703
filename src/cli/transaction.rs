//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::interaction::{Interaction, TerminalInteraction};
use crate::models::{Money, TransactionInput};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "-50.00" for an expense, "100.00" for income)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List,
    /// Show transaction details
    Show {
        /// List position, or transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// List position, or transaction ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// List position, or transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse an amount typed by the user
pub fn parse_amount(amount: &str) -> FinanceResult<Money> {
    Money::parse(amount).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount '{}'. Use a format like '-50.00' or '100'. ({})",
            amount, e
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
    interaction: &mut dyn Interaction,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.unwrap_or_else(|| {
                chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
            });

            let txn = service.add(TransactionInput::new(date, description, amount, category))?;

            interaction.notify("Transaction added successfully!");
            interaction.notify(&format!(
                "  {} {} {} ({})",
                txn.date,
                txn.description,
                txn.amount.format_with_symbol(symbol),
                txn.category
            ));
            interaction.notify(&format!("  ID: {}", txn.id));
        }

        TransactionCommands::List => {
            let transactions = service.list()?;
            print!("{}", format_transaction_list(&transactions, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.resolve(&id)?;
            let position = storage.transactions.position_of(txn.id)?.map(|p| p + 1);
            print!("{}", format_transaction_details(&txn, position, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            if amount.is_none() && description.is_none() && category.is_none() && date.is_none() {
                interaction.notify(
                    "No changes specified. Use --amount, --description, --category, or --date.",
                );
                return Ok(());
            }

            let txn = service.resolve(&id)?;
            let mut input = txn.to_input();
            if let Some(amount) = amount {
                input.amount = parse_amount(&amount)?;
            }
            if let Some(description) = description {
                input.description = description;
            }
            if let Some(category) = category {
                input.category = category;
            }
            if let Some(date) = date {
                input.date = date;
            }

            let updated = service.update(txn.id, input)?;
            interaction.notify(&format!("Updated transaction {}", updated.id));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.resolve(&id)?;

            let mut auto_confirm = TerminalInteraction::new(true);
            let confirmer: &mut dyn Interaction = if force || !settings.confirm_deletes {
                &mut auto_confirm
            } else {
                &mut *interaction
            };

            match service.remove(txn.id, confirmer)? {
                Some(removed) => interaction.notify(&format!(
                    "Deleted transaction: {} {} {}",
                    removed.date,
                    removed.description,
                    removed.amount.format_with_symbol(symbol)
                )),
                None => interaction.notify("Delete cancelled."),
            }
        }
    }

    Ok(())
}
