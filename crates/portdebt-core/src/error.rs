//! Error types for portdebt-core.

use crate::types::Column;

/// Why a numeric column did not decode to a clean number.
///
/// The legacy normalizer never surfaces these; it substitutes `0.0` (or the
/// numeric prefix, for [`FieldError::TrailingInput`]). The checked variant
/// reports them alongside the record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("column {column:?} is missing")]
    Missing { column: &'static str },

    #[error("column {column:?} is not numeric: {value}")]
    NotNumeric { column: &'static str, value: String },

    #[error("column {column:?} has trailing input after {parsed}: {value}")]
    TrailingInput {
        column: &'static str,
        value: String,
        parsed: f64,
    },
}

impl FieldError {
    pub(crate) fn missing(column: Column) -> Self {
        FieldError::Missing {
            column: column.header(),
        }
    }

    pub(crate) fn not_numeric(column: Column, value: impl Into<String>) -> Self {
        FieldError::NotNumeric {
            column: column.header(),
            value: value.into(),
        }
    }

    /// The value the legacy normalizer uses for this field.
    pub fn fallback(&self) -> f64 {
        match self {
            FieldError::TrailingInput { parsed, .. } => *parsed,
            FieldError::Missing { .. } | FieldError::NotNumeric { .. } => 0.0,
        }
    }
}
