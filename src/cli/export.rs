//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::{FinanceError, FinanceResult};
use crate::export::export_transactions_csv;
use crate::interaction::Interaction;
use crate::storage::Storage;

/// Export transactions to a CSV file, or to stdout when the path is `-`
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    interaction: &mut dyn Interaction,
) -> FinanceResult<()> {
    let transactions = storage.transactions.get_all()?;

    if output == Path::new("-") {
        let stdout = io::stdout();
        export_transactions_csv(&transactions, stdout.lock())?;
        return Ok(());
    }

    let file = File::create(output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;

    let count = export_transactions_csv(&transactions, BufWriter::new(file))?;
    interaction.notify(&format!(
        "Exported {} transactions to: {}",
        count,
        output.display()
    ));

    Ok(())
}
