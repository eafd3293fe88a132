use std::path::Path;

use tracing::{debug, info};

use crate::errors::ExpenseError;
use crate::storage::csv_backend;

use super::Expense;

/// Ordered, append-only collection of expenses backed by a CSV file.
/// Insertion order is preserved and doubles as display order.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
        }
    }

    /// Loads the store from `path`. A missing file yields an empty store;
    /// any line that fails to decode aborts the whole load.
    pub fn load(path: &Path) -> Result<Self, ExpenseError> {
        let expenses = csv_backend::load_expenses(path)?;
        info!(count = expenses.len(), path = %path.display(), "loaded expense store");
        Ok(Self { expenses })
    }

    pub fn append(&mut self, expense: Expense) {
        debug!(category = %expense.category, "appended expense");
        self.expenses.push(expense);
    }

    /// Read-only view of the records in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Rewrites `path` with the current records in store order. In-memory
    /// state is left untouched whether or not the write succeeds.
    pub fn save(&self, path: &Path) -> Result<(), ExpenseError> {
        csv_backend::save_expenses(path, &self.expenses)?;
        info!(count = self.expenses.len(), path = %path.display(), "saved expense store");
        Ok(())
    }
}
