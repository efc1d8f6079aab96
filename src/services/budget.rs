//! Budget service
//!
//! Reads and overwrites the monthly budget and computes spending status
//! against the expense ledger.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::storage::{BudgetValue, Storage};

/// Spending status for the current ledger contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// The stored monthly budget (zero when unset)
    pub budget: Money,
    /// Sum of all parseable ledger amounts
    pub spent: Money,
    /// budget - spent; negative when over budget
    pub remaining: Money,
}

impl BudgetStatus {
    /// Whether spending exceeds the budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// The absolute overage when over budget (zero otherwise)
    pub fn overage(&self) -> Money {
        if self.is_over_budget() {
            self.remaining.abs()
        } else {
            Money::zero()
        }
    }

    /// Spent as a fraction of budget, in percent (0.0 when no budget is set)
    pub fn percent_spent(&self) -> f64 {
        if self.budget.is_positive() {
            self.spent.cents() as f64 / self.budget.cents() as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the stored budget, falling back to zero on a missing or corrupt store
    pub fn get(&self) -> Money {
        self.storage.budget.read().amount()
    }

    /// Get the stored budget with the fallback made explicit
    pub fn get_detailed(&self) -> BudgetValue {
        self.storage.budget.read()
    }

    /// Parse and store a new budget value
    ///
    /// On parse failure the stored value is left unchanged and a validation
    /// error is returned. On success the store is overwritten wholesale with
    /// the value formatted to two decimal places.
    pub fn set(&self, input: &str) -> BudgetResult<Money> {
        let amount =
            Money::parse(input).map_err(|_| BudgetError::invalid_amount(input.trim()))?;

        let before = self.storage.budget.read().amount();
        self.storage.budget.write(amount)?;

        self.storage
            .log_update(EntityType::Budget, "budget", None, &before, &amount)?;

        Ok(amount)
    }

    /// Compute budget, spent, and remaining over a fresh ledger scan
    pub fn status(&self) -> BudgetStatus {
        let budget = self.get();
        let spent = self.storage.expenses.scan().total();

        BudgetStatus {
            budget,
            spent,
            remaining: budget - spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::Expense;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_get_unset_is_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert_eq!(service.get(), Money::zero());
        assert!(service.get_detailed().is_defaulted());
    }

    #[test]
    fn test_set_normalizes_to_two_decimals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("250").unwrap();

        assert_eq!(service.get(), Money::from_cents(25000));
        let contents = std::fs::read_to_string(storage.paths().budget_file()).unwrap();
        assert_eq!(contents, "250.00");
    }

    #[test]
    fn test_set_invalid_leaves_value_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("100.00").unwrap();

        let err = service.set("abc").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(), Money::from_cents(10000));
    }

    #[test]
    fn test_set_logs_audit_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("250").unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, "budget");
    }

    #[test]
    fn test_status_within_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("500").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        storage
            .expenses
            .append(&Expense::new(date, Money::from_cents(12000), "Food", ""))
            .unwrap();

        let status = service.status();
        assert_eq!(status.budget, Money::from_cents(50000));
        assert_eq!(status.spent, Money::from_cents(12000));
        assert_eq!(status.remaining, Money::from_cents(38000));
        assert!(!status.is_over_budget());
        assert_eq!(status.overage(), Money::zero());
    }

    #[test]
    fn test_status_over_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("100").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        storage
            .expenses
            .append(&Expense::new(date, Money::from_cents(12000), "Food", ""))
            .unwrap();

        let status = service.status();
        assert!(status.is_over_budget());
        assert_eq!(status.overage(), Money::from_cents(2000));
    }

    #[test]
    fn test_percent_spent() {
        let status = BudgetStatus {
            budget: Money::from_cents(50000),
            spent: Money::from_cents(12500),
            remaining: Money::from_cents(37500),
        };
        assert!((status.percent_spent() - 25.0).abs() < f64::EPSILON);

        let no_budget = BudgetStatus {
            budget: Money::zero(),
            spent: Money::from_cents(100),
            remaining: Money::from_cents(-100),
        };
        assert_eq!(no_budget.percent_spent(), 0.0);
    }
}
