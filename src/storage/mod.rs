//! Storage layer for the budget tracker
//!
//! Provides the two flat-file stores — the scalar budget store and the
//! append-only expense ledger — with atomic writes for the scalar store.
//! The stores are stateless: each operation opens, fully reads or writes,
//! and closes its file.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use budget::{BudgetStore, BudgetValue};
pub use expenses::{ExpenseLedger, LedgerScan, LEDGER_HEADER};
pub use file_io::write_text_atomic;
pub use init::{initialize_storage, needs_initialization};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: BudgetPaths,
    pub budget: BudgetStore,
    pub expenses: ExpenseLedger,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            budget: BudgetStore::new(paths.budget_file()),
            expenses: ExpenseLedger::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Log a create operation to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an update operation to the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), BudgetError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }
}
