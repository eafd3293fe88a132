use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ledger::Expense;

/// Aggregate reporting over a store snapshot. Both computations re-scan
/// the records on every call; the data set is small and in memory.
pub struct SummaryService;

impl SummaryService {
    /// Sum of all amounts, zero for an empty store.
    pub fn total(expenses: &[Expense]) -> Decimal {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Per-category sums, keyed by the exact category string (case
    /// sensitive, no trimming). Categories never recorded are absent;
    /// iteration order is unspecified.
    pub fn by_category(expenses: &[Expense]) -> HashMap<String, Decimal> {
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category.clone()).or_default() += expense.amount;
        }
        totals
    }
}
