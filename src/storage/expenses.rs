//! Append-only expense ledger
//!
//! Expenses live in `expenses.csv`: a fixed header row followed by one data
//! row per expense, in insertion order. Rows are appended and never rewritten.
//! The ledger is stateless; every scan re-reads the whole file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::BudgetError;
use crate::models::{Expense, Money};

/// The fixed header row of the expense ledger
pub const LEDGER_HEADER: [&str; 4] = ["date", "amount", "category", "note"];

/// The result of scanning the ledger
///
/// Rows whose fields fail to parse are dropped from `expenses` and counted in
/// `skipped`, so callers can distinguish an empty ledger from a corrupt one.
#[derive(Debug, Default)]
pub struct LedgerScan {
    /// Successfully parsed records, in insertion order
    pub expenses: Vec<Expense>,
    /// Number of data rows dropped because they failed to parse
    pub skipped: usize,
}

impl LedgerScan {
    /// Sum of all parsed amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Whether the scan yielded no parsed records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Number of parsed records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}

/// Append-only store for expense records
pub struct ExpenseLedger {
    path: PathBuf,
}

impl ExpenseLedger {
    /// Create a new ledger at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the ledger's file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the ledger file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the ledger containing only the header row if it does not exist
    ///
    /// Never overwrites an existing ledger.
    pub fn ensure_exists(&self) -> Result<(), BudgetError> {
        if self.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = std::fs::File::create(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(LEDGER_HEADER)?;
        writer.flush().map_err(BudgetError::from)?;

        Ok(())
    }

    /// Append one expense record to the ledger
    ///
    /// The header row is restored first if the file went missing, so the
    /// one-header-then-data invariant holds for every initialized ledger.
    /// Fields containing commas or quotes are quoted by the writer. No
    /// existing rows are touched.
    pub fn append(&self, expense: &Expense) -> Result<(), BudgetError> {
        self.ensure_exists()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.amount.plain(),
            expense.category.clone(),
            expense.note.clone(),
        ])?;
        writer.flush().map_err(BudgetError::from)?;

        Ok(())
    }

    /// Scan every data row of the ledger
    ///
    /// A missing or unopenable file yields an empty scan. Records that cannot
    /// be read, or whose amount or date fields fail to parse, are skipped and
    /// counted; no error is surfaced.
    pub fn scan(&self) -> LedgerScan {
        let mut scan = LedgerScan::default();

        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(_) => return scan,
        };

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(_) => {
                    scan.skipped += 1;
                    continue;
                }
            };

            let amount = match Money::parse(record.get(1).unwrap_or("")) {
                Ok(amount) => amount,
                Err(_) => {
                    scan.skipped += 1;
                    continue;
                }
            };

            let date = match NaiveDate::parse_from_str(record.get(0).unwrap_or(""), "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    scan.skipped += 1;
                    continue;
                }
            };

            scan.expenses.push(Expense::new(
                date,
                amount,
                record.get(2).unwrap_or(""),
                record.get(3).unwrap_or(""),
            ));
        }

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, ExpenseLedger) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        (temp_dir, ExpenseLedger::new(path))
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_ensure_exists_writes_header_only() {
        let (_temp_dir, ledger) = create_test_ledger();

        ledger.ensure_exists().unwrap();

        let contents = std::fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(contents, "date,amount,category,note\n");
    }

    #[test]
    fn test_scan_missing_file_is_empty() {
        let (_temp_dir, ledger) = create_test_ledger();

        let scan = ledger.scan();
        assert!(scan.is_empty());
        assert_eq!(scan.skipped, 0);
        assert_eq!(scan.total(), Money::zero());
    }

    #[test]
    fn test_append_and_scan() {
        let (_temp_dir, ledger) = create_test_ledger();

        let expense = Expense::new(test_date(), Money::from_cents(1250), "Food", "lunch");
        ledger.append(&expense).unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.expenses[0], expense);
        assert_eq!(scan.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_append_preserves_existing_rows() {
        let (_temp_dir, ledger) = create_test_ledger();

        ledger
            .append(&Expense::new(test_date(), Money::from_cents(1000), "Food", ""))
            .unwrap();
        ledger
            .append(&Expense::new(test_date(), Money::from_cents(2000), "Travel", ""))
            .unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 2);
        assert_eq!(scan.expenses[0].category, "Food");
        assert_eq!(scan.expenses[1].category, "Travel");

        // exactly one header row
        let contents = std::fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(
            contents.lines().filter(|l| l.starts_with("date,")).count(),
            1
        );
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_scan_skips_unparseable_amount() {
        let (_temp_dir, ledger) = create_test_ledger();

        ledger.ensure_exists().unwrap();
        std::fs::write(
            ledger.path(),
            "date,amount,category,note\n2025-01-15,12.50,Food,lunch\n2025-01-16,xyz,Food,bad row\n",
        )
        .unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.skipped, 1);
        assert_eq!(scan.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_scan_skips_malformed_date() {
        let (_temp_dir, ledger) = create_test_ledger();

        std::fs::write(
            ledger.path(),
            "date,amount,category,note\nnot-a-date,10.00,Food,\n2025-01-15,5.00,Food,\n",
        )
        .unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.skipped, 1);
    }

    #[test]
    fn test_comma_in_note_round_trips() {
        let (_temp_dir, ledger) = create_test_ledger();

        let expense = Expense::new(
            test_date(),
            Money::from_cents(4599),
            "Dining, Out",
            "burgers, fries, and a shake",
        );
        ledger.append(&expense).unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.expenses[0].category, "Dining, Out");
        assert_eq!(scan.expenses[0].note, "burgers, fries, and a shake");
    }

    #[test]
    fn test_scan_reads_legacy_unquoted_rows() {
        let (_temp_dir, ledger) = create_test_ledger();

        // A row written without quoting, as the original tool did
        std::fs::write(
            ledger.path(),
            "date,amount,category,note\n2025-01-15,12.5,Food,\n",
        )
        .unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.expenses[0].amount, Money::from_cents(1250));
    }

    #[test]
    fn test_negative_amounts_scan() {
        let (_temp_dir, ledger) = create_test_ledger();

        ledger
            .append(&Expense::new(
                test_date(),
                Money::from_cents(-500),
                "Refund",
                "",
            ))
            .unwrap();

        let scan = ledger.scan();
        assert_eq!(scan.total(), Money::from_cents(-500));
    }
}
