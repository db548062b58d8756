//! Normalizer: turns loosely-typed [`RawRecord`]s into [`PortRecord`]s.
//!
//! Every row yields a complete record. Numeric columns are read with the
//! leading-number rule (skip leading whitespace, take the longest decimal
//! prefix, ignore what follows) and fall back to `0.0` when nothing numeric
//! is found. Text columns are copied through untouched.
//!
//! [`process_port_data`] is the lenient entry point. The `_checked` variants
//! produce the same records but also report every numeric field that had to
//! be defaulted or truncated, for callers that want to see data-quality
//! problems instead of silently masking them.

use serde_json::Value;

use crate::error::FieldError;
use crate::types::{Column, PortRecord, RawRecord};

/// A numeric field that did not decode cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefault {
    pub column: Column,
    pub error: FieldError,
}

impl std::fmt::Display for FieldDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Output of the checked normalizer: the record the lenient path would have
/// produced, plus what was defaulted on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedRecord {
    pub record: PortRecord,
    pub defaulted: Vec<FieldDefault>,
}

impl CheckedRecord {
    /// True when every numeric column held a clean number.
    pub fn is_clean(&self) -> bool {
        self.defaulted.is_empty()
    }

    pub fn into_result(self) -> Result<PortRecord, Vec<FieldDefault>> {
        if self.defaulted.is_empty() {
            Ok(self.record)
        } else {
            Err(self.defaulted)
        }
    }
}

/// Normalise every row, preserving length and order.
pub fn process_port_data(rows: &[RawRecord]) -> Vec<PortRecord> {
    let mut defaulted = 0usize;
    let records: Vec<PortRecord> = rows
        .iter()
        .map(|raw| build_record(raw, |_, _| defaulted += 1))
        .collect();
    tracing::debug!(rows = records.len(), defaulted, "normalised port data");
    records
}

/// Normalise a single row.
pub fn normalize_record(raw: &RawRecord) -> PortRecord {
    build_record(raw, |_, _| {})
}

/// Checked counterpart of [`process_port_data`].
pub fn process_port_data_checked(rows: &[RawRecord]) -> Vec<CheckedRecord> {
    let checked: Vec<CheckedRecord> = rows.iter().map(normalize_record_checked).collect();
    let dirty = checked.iter().filter(|c| !c.is_clean()).count();
    tracing::debug!(rows = checked.len(), dirty, "normalised port data (checked)");
    checked
}

/// Checked counterpart of [`normalize_record`].
pub fn normalize_record_checked(raw: &RawRecord) -> CheckedRecord {
    let mut defaulted = Vec::new();
    let record = build_record(raw, |column, error| {
        defaulted.push(FieldDefault { column, error })
    });
    CheckedRecord { record, defaulted }
}

/// Decode one numeric column.
///
/// `Ok` only for a value that is entirely a number (surrounding whitespace
/// allowed). A blank string counts as missing.
pub fn parse_field(raw: &RawRecord, column: Column) -> Result<f64, FieldError> {
    match raw.column(column) {
        None | Some(Value::Null) => Err(FieldError::missing(column)),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(coerce)
            .ok_or_else(|| FieldError::not_numeric(column, n.to_string())),
        Some(Value::String(s)) => parse_text(column, s),
        Some(other) => Err(FieldError::not_numeric(column, other.to_string())),
    }
}

fn parse_text(column: Column, text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(FieldError::missing(column));
    }
    match numeric_prefix(trimmed) {
        None => Err(FieldError::not_numeric(column, text)),
        Some((value, rest)) if rest.trim().is_empty() => Ok(coerce(value)),
        Some((value, _)) => Err(FieldError::TrailingInput {
            column: column.header(),
            value: text.to_string(),
            parsed: coerce(value),
        }),
    }
}

fn build_record(raw: &RawRecord, mut on_default: impl FnMut(Column, FieldError)) -> PortRecord {
    let mut number = |column: Column| match parse_field(raw, column) {
        Ok(value) => value,
        Err(error) => {
            let value = coerce(error.fallback());
            on_default(column, error);
            value
        }
    };

    PortRecord {
        name: text_field(raw, Column::CountryName),
        code: text_field(raw, Column::CountryCode),
        debt_to_china: number(Column::DebtToChina),
        total_debt: number(Column::TotalDebt),
        gni: number(Column::Gni),
        debt_to_china_share: number(Column::DebtToChinaShareOfGni),
        debt_to_china_total_share: number(Column::DebtToChinaShareOfTotalDebt),
        coordinates: None,
    }
}

fn text_field(raw: &RawRecord, column: Column) -> Option<String> {
    match raw.column(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// NaN and negative zero both collapse to `0.0`.
fn coerce(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Longest prefix of `s` that reads as a decimal number, and the remainder.
///
/// Accepts an optional sign, then either `Infinity` or digits with an
/// optional fraction and exponent. An exponent marker without digits is left
/// in the remainder.
fn numeric_prefix(s: &str) -> Option<(f64, &str)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        let value = if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, &s[i + "Infinity".len()..]));
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let value = s[..i].parse::<f64>().ok()?;
    Some((value, &s[i..]))
}
