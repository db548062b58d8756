//! Domain-specific assertion macros for portdebt harnesses.
//!
//! These add context-rich failure messages that make it clear *which* row
//! and *which* column broke an expectation.

use portdebt_core::{Column, PortRecord};

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that a numeric column of a `PortRecord` holds an exact value.
///
/// ```rust
/// assert_numeric!(record, Column::Gni, 88e9);
/// ```
#[macro_export]
macro_rules! assert_numeric {
    ($record:expr, $column:expr, $value:expr) => {{
        let record: &portdebt_core::PortRecord = &$record;
        let column: portdebt_core::Column = $column;
        let expected: f64 = $value;
        match record.numeric(column) {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_numeric! failed:\n  record: {:?}\n  column: {}\n  expected: {}\n  actual:   {}",
                record.name, column, expected, actual
            ),
            None => panic!("assert_numeric! failed: {} is not a numeric column", column),
        }
    }};
}

/// Assert that a normalised sequence carries exactly these names, in order.
///
/// ```rust
/// assert_names!(records, ["Angola", "Kenya"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($records:expr, $names:expr) => {{
        let actual: Vec<Option<&str>> = $records.iter().map(|r| r.name.as_deref()).collect();
        let expected: Vec<Option<&str>> = $names.iter().map(|n: &&str| Some(*n)).collect();
        pretty_assertions::assert_eq!(actual, expected, "assert_names! failed");
    }};
}

// ---------------------------------------------------------------------------
// Record invariant helpers
// ---------------------------------------------------------------------------

/// Every normalised record has every numeric field finite-or-parsed (never
/// NaN), never a negative zero, and no coordinates.
pub fn assert_record_invariants(record: &PortRecord) {
    for column in Column::NUMERIC {
        let value = record.numeric(column).unwrap();
        assert!(!value.is_nan(), "{column} is NaN for {:?}", record.name);
        assert!(
            value != 0.0 || value.is_sign_positive(),
            "{column} is -0 for {:?}",
            record.name
        );
    }
    assert!(
        record.coordinates.is_none(),
        "coordinates must stay unset: {:?}",
        record.name
    );
}
