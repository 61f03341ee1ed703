//! Summary display formatting

use std::collections::BTreeMap;

use crate::services::Summary;

/// Format the income/expense/balance summary
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    format!(
        "Total Income:   {}\nTotal Expenses: {}\nBalance:        {}\n",
        summary.income.format_with_symbol(symbol),
        summary.expenses.format_with_symbol(symbol),
        summary.balance.format_with_symbol(symbol)
    )
}

/// Format per-category totals
pub fn format_category_breakdown(breakdown: &BTreeMap<String, Summary>, symbol: &str) -> String {
    if breakdown.is_empty() {
        return String::new();
    }

    let name_width = breakdown
        .keys()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Category",
        "Income",
        "Expenses",
        "Net",
        width = name_width
    );
    output.push_str(&"-".repeat(name_width + 42));
    output.push('\n');

    for (category, summary) in breakdown {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}\n",
            category,
            summary.income.format_with_symbol(symbol),
            summary.expenses.format_with_symbol(symbol),
            summary.balance.format_with_symbol(symbol),
            width = name_width
        ));
    }

    output
}
