//! Income/expense summaries

use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Totals across a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of negative amounts (stays negative)
    pub expenses: Money,
    /// income + expenses
    pub balance: Money,
}

impl Summary {
    /// Summarize a slice of transactions
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();
        for txn in transactions {
            summary.record(txn.amount);
        }
        summary
    }

    /// Like [`of`](Self::of), but `None` if any total overflows
    pub fn checked_of(transactions: &[Transaction]) -> Option<Self> {
        let mut summary = Summary::default();
        for txn in transactions {
            if txn.amount.is_positive() {
                summary.income = summary.income.checked_add(txn.amount)?;
            } else {
                summary.expenses = summary.expenses.checked_add(txn.amount)?;
            }
        }
        summary.balance = summary.income.checked_add(summary.expenses)?;
        Some(summary)
    }

    fn record(&mut self, amount: Money) {
        if amount.is_positive() {
            self.income += amount;
        } else if amount.is_negative() {
            self.expenses += amount;
        }
        self.balance = self.income + self.expenses;
    }
}

/// Per-category totals, ordered by category name
pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, Summary> {
    let mut breakdown: BTreeMap<String, Summary> = BTreeMap::new();
    for txn in transactions {
        breakdown
            .entry(txn.category.clone())
            .or_default()
            .record(txn.amount);
    }
    breakdown
}
