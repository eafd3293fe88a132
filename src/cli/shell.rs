use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::cli::io::{Prompter, ReadlinePrompter, ScriptPrompter};
use crate::cli::output;
use crate::config::Config;
use crate::errors::ExpenseError;
use crate::ledger::{parse_amount, Expense, ExpenseStore};
use crate::report::SummaryService;

const SCRIPT_ENV_VAR: &str = "EXPENSE_CORE_CLI_SCRIPT";

const MENU: &str = "\
1. Add Expense
2. View Expenses
3. View Summary
4. Save & Exit";

enum LoopControl {
    Continue,
    Exit,
}

/// Loads the store and runs the menu loop until Save & Exit (or end of
/// input). Interactive runs read through rustyline; setting
/// `EXPENSE_CORE_CLI_SCRIPT` switches to newline-delimited stdin answers.
pub fn run_cli(config: &Config) -> Result<(), ExpenseError> {
    let store = ExpenseStore::load(&config.data_file)?;
    if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        let stdin = io::stdin();
        let prompter = ScriptPrompter::new(stdin.lock());
        Shell::new(store, config, prompter, io::stdout()).run()
    } else {
        let prompter = ReadlinePrompter::new()?;
        Shell::new(store, config, prompter, io::stdout()).run()
    }
}

/// Interactive menu loop. Owns the store for the lifetime of the session;
/// all input flows through the prompter and all output through the writer,
/// so the loop runs the same against a terminal or a test harness.
struct Shell<P: Prompter, W: Write> {
    store: ExpenseStore,
    data_file: PathBuf,
    currency_symbol: String,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Shell<P, W> {
    fn new(store: ExpenseStore, config: &Config, prompter: P, out: W) -> Self {
        Self {
            store,
            data_file: config.data_file.clone(),
            currency_symbol: config.currency_symbol.clone(),
            prompter,
            out,
        }
    }

    fn run(&mut self) -> Result<(), ExpenseError> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", output::section("Expense Tracker"))?;
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompter.read_line("Choose an option: ")? else {
                self.exit_without_saving()?;
                return Ok(());
            };
            match self.dispatch(choice.trim())? {
                LoopControl::Continue => {}
                LoopControl::Exit => return Ok(()),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<LoopControl, ExpenseError> {
        match choice {
            "1" => self.add_expense(Local::now().date_naive()),
            "2" => self.view_expenses(),
            "3" => self.view_summary(),
            "4" => self.save_and_exit(),
            _ => {
                writeln!(self.out, "{}", output::warning("Invalid choice!"))?;
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Gathers raw field values, stamping `date` on the record. Malformed
    /// amounts reprompt instead of aborting the session.
    fn add_expense(&mut self, date: NaiveDate) -> Result<LoopControl, ExpenseError> {
        let amount = loop {
            let Some(raw) = self.prompter.read_line("Enter amount: ")? else {
                return self.exit_without_saving();
            };
            match parse_amount(&raw) {
                Ok(amount) => break amount,
                Err(err) => writeln!(self.out, "{}", output::warning(err))?,
            }
        };
        let Some(category) = self
            .prompter
            .read_line("Enter category (Food, Rent, Entertainment, etc.): ")?
        else {
            return self.exit_without_saving();
        };
        let Some(description) = self.prompter.read_line("Enter description: ")? else {
            return self.exit_without_saving();
        };

        self.store
            .append(Expense::new(amount, category, description, date));
        writeln!(self.out, "{}", output::success("Expense added successfully!"))?;
        Ok(LoopControl::Continue)
    }

    fn view_expenses(&mut self) -> Result<LoopControl, ExpenseError> {
        if self.store.is_empty() {
            writeln!(self.out, "No expenses recorded.")?;
            return Ok(LoopControl::Continue);
        }
        writeln!(self.out)?;
        writeln!(self.out, "Date       | Amount    | Category        | Description")?;
        writeln!(self.out, "---------------------------------------------------------")?;
        for expense in self.store.all() {
            let amount = format!("{}{:.2}", self.currency_symbol, expense.amount);
            writeln!(
                self.out,
                "{:<10} | {:<9} | {:<15} | {}",
                expense.date.to_string(),
                amount,
                expense.category,
                expense.description
            )?;
        }
        Ok(LoopControl::Continue)
    }

    fn view_summary(&mut self) -> Result<LoopControl, ExpenseError> {
        if self.store.is_empty() {
            writeln!(self.out, "No expenses recorded.")?;
            return Ok(LoopControl::Continue);
        }
        writeln!(self.out)?;
        writeln!(self.out, "--- Expense Summary ---")?;
        writeln!(
            self.out,
            "Total spent: {}{:.2}",
            self.currency_symbol,
            SummaryService::total(self.store.all())
        )?;

        // The map itself is unordered; sort for stable display only.
        let totals = SummaryService::by_category(self.store.all());
        let mut categories: Vec<_> = totals.into_iter().collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        for (category, amount) in categories {
            writeln!(
                self.out,
                "{:<15} : {}{:.2}",
                category, self.currency_symbol, amount
            )?;
        }
        Ok(LoopControl::Continue)
    }

    /// A failed save reports the error and keeps the session alive; the
    /// in-memory records are untouched.
    fn save_and_exit(&mut self) -> Result<LoopControl, ExpenseError> {
        match self.store.save(&self.data_file) {
            Ok(()) => {
                writeln!(self.out, "{}", output::success("Expenses saved. Goodbye!"))?;
                Ok(LoopControl::Exit)
            }
            Err(err) => {
                writeln!(self.out, "{}", output::error(err))?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn exit_without_saving(&mut self) -> Result<LoopControl, ExpenseError> {
        warn!("input closed, exiting without saving");
        writeln!(self.out, "{}", output::warning("Exiting without saving."))?;
        Ok(LoopControl::Exit)
    }
}
