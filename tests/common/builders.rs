//! Test builders: ergonomic constructors for `RawRecord` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use portdebt_core::{Column, RawRecord};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawRecordBuilder::new()
///     .country("Kenya", "KEN")
///     .set(Column::DebtToChina, "7400000000")
///     .build();
/// ```
#[derive(Default)]
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(self, name: &str, code: &str) -> Self {
        self.set(Column::CountryName, name).set(Column::CountryCode, code)
    }

    pub fn set(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.record.insert(column.header(), value);
        self
    }

    /// Set a column that the normalizer does not know about.
    pub fn extra(mut self, header: &str, value: impl Into<Value>) -> Self {
        self.record.insert(header, value);
        self
    }

    /// Set every numeric column to the same value.
    pub fn all_numeric(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        for column in Column::NUMERIC {
            self.record.insert(column.header(), value.clone());
        }
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A row with every column present as a string, as a CSV source yields it.
pub fn csv_row(name: &str, code: &str, numbers: [&str; 5]) -> RawRecord {
    Column::NUMERIC
        .iter()
        .zip(numbers)
        .fold(RawRecordBuilder::new().country(name, code), |b, (c, v)| b.set(*c, v))
        .build()
}

/// `n` complete rows named `country-<i>` with debt `i * 1e6` and share `i % 120`.
pub fn build_dataset(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            RawRecordBuilder::new()
                .country(&format!("country-{i}"), &format!("C{i:03}"))
                .set(Column::DebtToChina, (i as f64 * 1e6).to_string())
                .set(Column::TotalDebt, (i as f64 * 4e6).to_string())
                .set(Column::Gni, (i as f64 * 2e7).to_string())
                .set(Column::DebtToChinaShareOfGni, ((i % 120) as f64).to_string())
                .set(Column::DebtToChinaShareOfTotalDebt, "25")
                .build()
        })
        .collect()
}
