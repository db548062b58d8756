//! portdebt-feeds: raw record sources for portdebt.
//!
//! Each source reads a whole dataset into memory as
//! [`portdebt_core::RawRecord`]s. Cleaning beyond "rows need a country and a
//! debt figure" ([`drop_incomplete`]) is left to the normalizer.

pub mod csv;
pub mod error;
pub mod json;

use std::path::Path;

use portdebt_core::config::SourceConfig;
use portdebt_core::RawRecord;
use serde_json::Value;

pub use crate::csv::CsvSource;
pub use crate::error::SourceError;
pub use crate::json::JsonSource;

/// Implemented by each raw record source.
pub trait RecordSource {
    fn kind(&self) -> SourceKind;

    /// Read every record. A source can be read once; later calls return
    /// [`SourceError::Exhausted`].
    fn read_records(&mut self) -> Result<Vec<RawRecord>, SourceError>;
}

/// Which format a source reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Csv,
    Json,
}

impl SourceKind {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(SourceKind::Csv),
            "json" => Some(SourceKind::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Csv => write!(f, "csv"),
            SourceKind::Json => write!(f, "json"),
        }
    }
}

/// Open `path` as a record source. With `kind == None` the format comes from
/// the file extension.
pub fn open_path(
    path: &Path,
    kind: Option<SourceKind>,
    cfg: &SourceConfig,
) -> Result<Box<dyn RecordSource>, SourceError> {
    let kind = match kind.or_else(|| SourceKind::from_path(path)) {
        Some(kind) => kind,
        None => {
            return Err(SourceError::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
    };
    tracing::debug!(path = %path.display(), %kind, "opening record source");

    Ok(match kind {
        SourceKind::Csv => Box::new(CsvSource::open(path, cfg.skip_rows)?),
        SourceKind::Json => Box::new(JsonSource::open(path)?),
    })
}

/// Placeholder strings that mark a required cell as missing. Same set the
/// spreadsheet tooling treats as "not available" by default.
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Drop rows where any `required` column is absent, null, blank or one of
/// the [`MISSING_MARKERS`].
pub fn drop_incomplete<S: AsRef<str>>(records: Vec<RawRecord>, required: &[S]) -> Vec<RawRecord> {
    let before = records.len();
    let kept: Vec<RawRecord> = records
        .into_iter()
        .filter(|record| required.iter().all(|col| is_present(record.get(col.as_ref()))))
        .collect();
    tracing::debug!(before, kept = kept.len(), "dropped incomplete rows");
    kept
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => {
            let s = s.trim();
            !s.is_empty() && !MISSING_MARKERS.contains(&s)
        }
        Some(_) => true,
    }
}
