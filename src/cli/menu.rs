//! Interactive menu loop
//!
//! A single-threaded, blocking read-evaluate-print loop: display the fixed
//! menu, read one line, dispatch on exact match "1".."5". All user-facing
//! parse failures are reported and the loop continues; end-of-input ends the
//! loop so a closed stdin never hangs or crashes the program.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{colorize_money, double_separator, format_bar, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::{BudgetService, ExpenseService};
use crate::storage::Storage;

const MENU_WIDTH: usize = 27;
const BAR_WIDTH: usize = 20;

/// One interactive session over the given storage and settings
pub struct MenuSession<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> MenuSession<'a> {
    /// Create a new menu session
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> BudgetResult<()> {
        loop {
            self.print_menu(output)?;

            let choice = match prompt(input, output, "Select an option (1-5): ")? {
                Some(choice) => choice,
                None => break, // end of input
            };

            match choice.as_str() {
                "1" => self.handle_set_budget(input, output)?,
                "2" => self.handle_add_expense(input, output)?,
                "3" => self.handle_status(output)?,
                "4" => self.handle_summary(output)?,
                "5" => {
                    writeln!(output, "Goodbye. Your data is saved.")?;
                    break;
                }
                _ => writeln!(output, "❌ Invalid choice.")?,
            }
        }

        Ok(())
    }

    fn print_menu<W: Write>(&self, output: &mut W) -> BudgetResult<()> {
        writeln!(output)?;
        writeln!(output, "{}", double_separator(MENU_WIDTH))?;
        writeln!(output, "  Personal Budget Tracker")?;
        writeln!(output, "{}", double_separator(MENU_WIDTH))?;
        writeln!(output, "1. Set monthly budget")?;
        writeln!(output, "2. Add an expense")?;
        writeln!(output, "3. View budget status")?;
        writeln!(output, "4. View spending summary")?;
        writeln!(output, "5. Exit")?;
        Ok(())
    }

    fn handle_set_budget<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> BudgetResult<()> {
        let raw = match prompt(input, output, "Enter your monthly budget: ")? {
            Some(raw) => raw,
            None => return Ok(()),
        };

        let service = BudgetService::new(self.storage);
        match service.set(&raw) {
            Ok(amount) => {
                writeln!(output, "✅ Budget set to {}", self.fmt(amount))?;
            }
            Err(BudgetError::Validation(_)) => {
                writeln!(output, "❌ Invalid input. Try again.")?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn handle_add_expense<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> BudgetResult<()> {
        let raw_amount = match prompt(input, output, "Enter amount spent: ")? {
            Some(raw) => raw,
            None => return Ok(()),
        };

        // Abort before the category prompt on a bad amount
        if Money::parse(&raw_amount).is_err() {
            writeln!(output, "❌ Invalid amount.")?;
            return Ok(());
        }

        let category = match prompt(input, output, "Enter category (Food, Travel, etc): ")? {
            Some(category) => category,
            None => return Ok(()),
        };
        let note = match prompt(input, output, "Optional note: ")? {
            Some(note) => note,
            None => return Ok(()),
        };

        let service = ExpenseService::new(self.storage);
        match service.add(&raw_amount, &category, &note) {
            Ok(_) => writeln!(output, "✅ Expense added.")?,
            Err(BudgetError::Validation(_)) => writeln!(output, "❌ Invalid amount.")?,
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn handle_status<W: Write>(&self, output: &mut W) -> BudgetResult<()> {
        let service = BudgetService::new(self.storage);
        let status = service.status();

        writeln!(output)?;
        writeln!(output, "Budget:    {}", self.fmt(status.budget))?;
        writeln!(output, "Spent:     {}", self.fmt(status.spent))?;

        if status.is_over_budget() {
            writeln!(
                output,
                "⚠️  Over budget by {}",
                colorize_money(&self.fmt(status.overage()), -status.overage())
            )?;
        } else {
            writeln!(
                output,
                "Remaining: {}",
                colorize_money(&self.fmt(status.remaining), status.remaining)
            )?;
        }

        if status.budget.is_positive() {
            writeln!(
                output,
                "[{}] {:.0}% used",
                format_bar(
                    status.spent.cents().max(0) as f64,
                    status.budget.cents() as f64,
                    BAR_WIDTH
                ),
                status.percent_spent()
            )?;
        }
        writeln!(output)?;

        Ok(())
    }

    fn handle_summary<W: Write>(&self, output: &mut W) -> BudgetResult<()> {
        let service = ExpenseService::new(self.storage);

        if !service.ledger_exists() {
            writeln!(output, "No expenses found.")?;
            return Ok(());
        }

        writeln!(output)?;
        writeln!(output, "Expense Summary")?;
        writeln!(output, "{}", separator(MENU_WIDTH))?;

        for entry in service.summary() {
            writeln!(
                output,
                "  {:<16} {:>9}",
                entry.category,
                self.fmt(entry.total)
            )?;
        }
        writeln!(output)?;

        Ok(())
    }

    fn fmt(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}

/// Write a prompt, flush, and read one trimmed line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> BudgetResult<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
