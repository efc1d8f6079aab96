//! Storage initialization
//!
//! Handles first-run setup of the two flat-file stores.

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

use super::budget::BudgetStore;
use super::expenses::ExpenseLedger;

/// Initialize storage for a fresh installation
///
/// Ensures directories exist, creates the budget store containing "0.00" and
/// the expense ledger containing only the header row. Idempotent: safe to
/// call on every startup, never overwrites existing stores.
pub fn initialize_storage(paths: &BudgetPaths) -> Result<(), BudgetError> {
    paths.ensure_directories()?;

    BudgetStore::new(paths.budget_file()).ensure_exists()?;
    ExpenseLedger::new(paths.expenses_file()).ensure_exists()?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetPaths) -> bool {
    !paths.budget_file().exists() || !paths.expenses_file().exists()
}
