//! Expense service
//!
//! Records expenses in the ledger and aggregates them for reporting.

use std::collections::HashMap;

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Service for expense recording and aggregation
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse the amount and append one expense record
    ///
    /// On parse failure no write is performed and a validation error is
    /// returned. On success the record is stamped with the current local
    /// date; the sign of the amount is not validated.
    pub fn add(&self, amount_input: &str, category: &str, note: &str) -> BudgetResult<Expense> {
        let amount = Money::parse(amount_input)
            .map_err(|_| BudgetError::invalid_amount(amount_input.trim()))?;

        let expense = Expense::today(amount, category, note);
        self.storage.expenses.append(&expense)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.date.to_string(),
            Some(expense.category.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Sum all parseable amounts over a fresh ledger scan
    ///
    /// Rows whose amount fails to parse are silently skipped.
    pub fn total_spent(&self) -> Money {
        self.storage.expenses.scan().total()
    }

    /// Group ledger rows by category, in first-seen order
    ///
    /// Uses the same skip policy as [`ExpenseService::total_spent`].
    pub fn summary(&self) -> Vec<CategoryTotal> {
        let scan = self.storage.expenses.scan();

        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Money> = HashMap::new();

        for expense in &scan.expenses {
            if !totals.contains_key(&expense.category) {
                order.push(expense.category.clone());
            }
            *totals.entry(expense.category.clone()).or_insert(Money::zero()) += expense.amount;
        }

        order
            .into_iter()
            .map(|category| {
                let total = totals[&category];
                CategoryTotal { category, total }
            })
            .collect()
    }

    /// Whether the ledger file exists at all
    pub fn ledger_exists(&self) -> bool {
        self.storage.expenses.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use chrono::Local;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_appends_one_row_with_today() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let before = service.total_spent();
        let expense = service.add("12.50", "Food", "lunch").unwrap();

        assert_eq!(expense.date, Local::now().date_naive());
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.note, "lunch");

        let scan = storage.expenses.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(service.total_spent() - before, Money::from_cents(1250));
    }

    #[test]
    fn test_add_invalid_amount_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add("xyz", "Food", "").unwrap_err();
        assert!(err.is_validation());

        assert!(!storage.expenses.exists());
        assert_eq!(service.total_spent(), Money::zero());
    }

    #[test]
    fn test_add_logs_audit_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("12.50", "Food", "").unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Food"));
    }

    #[test]
    fn test_negative_amount_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("-5.00", "Refund", "returned item").unwrap();

        assert_eq!(service.total_spent(), Money::from_cents(-500));
    }

    #[test]
    fn test_summary_first_seen_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("10", "Food", "").unwrap();
        service.add("20", "Travel", "").unwrap();
        service.add("5", "Food", "").unwrap();

        let summary = service.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "Food");
        assert_eq!(summary[0].total, Money::from_cents(1500));
        assert_eq!(summary[1].category, "Travel");
        assert_eq!(summary[1].total, Money::from_cents(2000));
    }

    #[test]
    fn test_summary_and_total_skip_unparseable_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("10", "Food", "").unwrap();

        // Corrupt one row by hand
        let path = storage.paths().expenses_file();
        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str("2025-01-16,not-a-number,Food,bad row\n");
        std::fs::write(&path, contents).unwrap();

        assert_eq!(service.total_spent(), Money::from_cents(1000));

        let summary = service.summary();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total, Money::from_cents(1000));

        assert_eq!(storage.expenses.scan().skipped, 1);
    }

    #[test]
    fn test_ledger_exists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(!service.ledger_exists());
        service.add("10", "Food", "").unwrap();
        assert!(service.ledger_exists());
    }
}
