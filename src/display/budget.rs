//! Budget display formatting

use crate::models::{BudgetStatus, Budgets};

/// Format the budget list
pub fn format_budget_list(budgets: &Budgets, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::from("Current Budgets:\n");
    for (category, ceiling) in budgets {
        output.push_str(&format!(
            "  {}: {}\n",
            category,
            ceiling.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format spending against each budget as a table
pub fn format_budget_status(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let name_width = statuses
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        width = name_width
    );
    output.push_str(&"-".repeat(name_width + 42));
    output.push('\n');

    for status in statuses {
        let flag = if status.is_over() { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}{}\n",
            status.category,
            status.ceiling.format_with_symbol(symbol),
            status.spent.format_with_symbol(symbol),
            status.remaining().format_with_symbol(symbol),
            flag,
            width = name_width
        ));
    }

    output
}
