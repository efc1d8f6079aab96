//! Scalar budget store
//!
//! The budget is a single decimal value stored as the sole contents of
//! `budget.txt`. The store is stateless: every read goes to disk, every write
//! replaces the file wholesale.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;
use crate::models::Money;

use super::file_io::write_text_atomic;

/// The outcome of reading the scalar store
///
/// Distinguishes a value that was actually stored from the zero fallback used
/// when the file is missing or its content does not parse. Callers that only
/// want a number use [`BudgetValue::amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetValue {
    /// The store held a parseable decimal
    Set(Money),
    /// The store was missing or corrupt; treated as zero
    Defaulted,
}

impl BudgetValue {
    /// The amount, with the zero fallback applied
    pub fn amount(&self) -> Money {
        match self {
            BudgetValue::Set(amount) => *amount,
            BudgetValue::Defaulted => Money::zero(),
        }
    }

    /// Whether the zero fallback was applied
    pub fn is_defaulted(&self) -> bool {
        matches!(self, BudgetValue::Defaulted)
    }
}

/// Store for the single budget value
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a new budget store at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the store's file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the store file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the store containing "0.00" if it does not exist
    ///
    /// Never overwrites an existing store.
    pub fn ensure_exists(&self) -> Result<(), BudgetError> {
        if !self.exists() {
            self.write(Money::zero())?;
        }
        Ok(())
    }

    /// Read the stored budget
    ///
    /// A missing file or unparseable content yields [`BudgetValue::Defaulted`];
    /// no error is surfaced.
    pub fn read(&self) -> BudgetValue {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return BudgetValue::Defaulted,
        };

        match Money::parse(contents.trim()) {
            Ok(amount) => BudgetValue::Set(amount),
            Err(_) => BudgetValue::Defaulted,
        }
    }

    /// Overwrite the store with the given amount, formatted to two decimals
    pub fn write(&self, amount: Money) -> Result<(), BudgetError> {
        write_text_atomic(&self.path, &amount.plain())
    }
}
