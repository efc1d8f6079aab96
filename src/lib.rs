//! budget-cli - Terminal-based monthly budget and expense tracker
//!
//! This library provides the core functionality for the budget tracker: a
//! monthly budget held in a scalar flat-file store, an append-only CSV ledger
//! of expenses, and the reporting that compares the two.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses)
//! - `storage`: Flat-file storage layer (scalar store + CSV ledger)
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting helpers
//! - `cli`: Interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_cli::config::{paths::BudgetPaths, settings::Settings};
//! use budget_cli::storage::{initialize_storage, Storage};
//!
//! let paths = BudgetPaths::new()?;
//! initialize_storage(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
