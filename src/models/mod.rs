//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the domain:
//! monetary amounts and expense records.

pub mod expense;
pub mod money;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
