//! Expense record model
//!
//! An expense is an immutable ledger record: it is appended once and never
//! mutated or deleted by this system.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date the expense was recorded (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Amount spent; the sign is not validated
    pub amount: Money,

    /// Free-text grouping label
    pub category: String,

    /// Free-text note, may be empty
    pub note: String,
}

impl Expense {
    /// Create an expense record with an explicit date
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    /// Create an expense record stamped with the current local date
    pub fn today(amount: Money, category: impl Into<String>, note: impl Into<String>) -> Self {
        Self::new(Local::now().date_naive(), amount, category, note)
    }
}
