use std::path::PathBuf;

/// Failure to load raw records from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("cannot tell the format of {} from its extension", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("source has already been read")]
    Exhausted,
}
