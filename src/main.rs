use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{
    handle_budget_command, handle_export_command, handle_summary_command,
    handle_transaction_command,
};
use finance_tracker::config::{paths::FinancePaths, settings::Settings};
use finance_tracker::interaction::TerminalInteraction;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance tracker with per-category budgets",
    long_about = "Records income and expenses, keeps spending ceilings per category \
                  and refuses new expenses that would push a category over its budget. \
                  All data lives in two JSON files under the data directory."
)]
struct Cli {
    /// Base directory for settings and data files
    #[arg(long, global = true, env = "FINANCE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(finance_tracker::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(finance_tracker::cli::BudgetCommands),

    /// Show total income, expenses and balance
    Summary {
        /// Also break totals down per category
        #[arg(long)]
        by_category: bool,
    },

    /// Export transactions to CSV ("-" writes to stdout)
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings, cli.verbose);
    tracing::debug!(base_dir = %paths.base_dir().display(), "starting");

    // Initialize storage
    let storage = Storage::open(paths.clone())?;
    let mut interaction = TerminalInteraction::new(false);

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd, &mut interaction)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd, &mut interaction)?;
        }
        Some(Commands::Summary { by_category }) => {
            handle_summary_command(&storage, &settings, by_category)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, &output, &mut interaction)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finance tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'finance budget set <CATEGORY> <AMOUNT>' to add a budget.");
            println!("Run 'finance transaction add <AMOUNT> <DESCRIPTION> -c <CATEGORY>' to record a transaction.");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Confirm deletes: {}", settings.confirm_deletes);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("Finance Tracker - income, expenses and category budgets");
            println!();
            println!("Run 'finance --help' for usage information.");
        }
    }

    Ok(())
}
