//! Core types for portdebt-core.
//!
//! This module defines the data structures shared by every layer: the
//! loosely-typed [`RawRecord`] produced by record sources, the [`Column`]
//! schema it is read through, and the normalised [`PortRecord`] handed to the
//! rendering layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One input row of debt statistics, keyed by human-readable column name.
///
/// Values are whatever the source produced: strings from CSV cells, numbers
/// or strings from JSON, `null` for empty cells. Nothing is validated here;
/// any column may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up a value by its exact column header.
    pub fn get(&self, header: &str) -> Option<&Value> {
        self.0.get(header)
    }

    /// Look up one of the known columns.
    pub fn column(&self, column: Column) -> Option<&Value> {
        self.0.get(column.header())
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(header.into(), value.into())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The columns of the debt dataset that the normalizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    CountryName,
    CountryCode,
    DebtToChina,
    TotalDebt,
    Gni,
    DebtToChinaShareOfGni,
    DebtToChinaShareOfTotalDebt,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::CountryName,
        Column::CountryCode,
        Column::DebtToChina,
        Column::TotalDebt,
        Column::Gni,
        Column::DebtToChinaShareOfGni,
        Column::DebtToChinaShareOfTotalDebt,
    ];

    /// Columns coerced to numbers, in [`PortRecord`] field order.
    pub const NUMERIC: [Column; 5] = [
        Column::DebtToChina,
        Column::TotalDebt,
        Column::Gni,
        Column::DebtToChinaShareOfGni,
        Column::DebtToChinaShareOfTotalDebt,
    ];

    /// Header text exactly as it appears in the published dataset.
    pub const fn header(self) -> &'static str {
        match self {
            Column::CountryName => "Country Name",
            Column::CountryCode => "Country Code",
            Column::DebtToChina => "Debt to China",
            Column::TotalDebt => "Total debt",
            Column::Gni => "GNI",
            Column::DebtToChinaShareOfGni => "Debt to China as share of GNI",
            Column::DebtToChinaShareOfTotalDebt => "Debt to China as share of total debt",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.header() == header)
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Column::CountryName | Column::CountryCode)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Geographic position of a marker. Never filled in by this crate; the
/// rendering layer resolves it separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A normalised country record, one per input row.
///
/// Numeric fields are always present; anything that could not be read as a
/// number is `0.0`. Serialises with the camelCase keys the map front end
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRecord {
    pub name: Option<String>,
    pub code: Option<String>,
    pub debt_to_china: f64,
    pub total_debt: f64,
    pub gni: f64,
    /// Debt to China as a percentage of GNI.
    pub debt_to_china_share: f64,
    /// Debt to China as a percentage of total external debt.
    pub debt_to_china_total_share: f64,
    pub coordinates: Option<Coordinates>,
}

impl PortRecord {
    /// Value of a numeric column. Returns `None` for the text columns.
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::DebtToChina => Some(self.debt_to_china),
            Column::TotalDebt => Some(self.total_debt),
            Column::Gni => Some(self.gni),
            Column::DebtToChinaShareOfGni => Some(self.debt_to_china_share),
            Column::DebtToChinaShareOfTotalDebt => Some(self.debt_to_china_total_share),
            Column::CountryName | Column::CountryCode => None,
        }
    }
}
