//! JSON source: a single array of objects, one per row, keyed by column
//! header. This is the shape the data API served.
//!
//! The API wrote empty cells as bare `NaN` (and overflowed figures as
//! `Infinity`), which is not valid JSON. Those tokens are read as `null`
//! when they appear outside a string.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use portdebt_core::RawRecord;
use serde_json::Value;

use crate::{RecordSource, SourceError, SourceKind};

pub struct JsonSource<R> {
    reader: Option<R>,
}

impl JsonSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> JsonSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: Read> RecordSource for JsonSource<R> {
    fn kind(&self) -> SourceKind {
        SourceKind::Json
    }

    fn read_records(&mut self) -> Result<Vec<RawRecord>, SourceError> {
        let mut reader = self.reader.take().ok_or(SourceError::Exhausted)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let document: Value = serde_json::from_str(&null_non_finite(&text))?;

        let Value::Array(rows) = document else {
            return Err(SourceError::NotAnArray);
        };

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Object(map) => Ok(RawRecord::from(map)),
                _ => Err(SourceError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = records.len(), "read json");
        Ok(records)
    }
}

/// Replace bare `NaN`, `Infinity` and `-Infinity` tokens with `null`.
/// String contents are left alone.
fn null_non_finite(text: &str) -> Cow<'_, str> {
    const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut last = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        match TOKENS.iter().find(|t| bytes[i..].starts_with(t.as_bytes())) {
            Some(token) => {
                out.push_str(&text[last..i]);
                out.push_str("null");
                i += token.len();
                last = i;
            }
            None => i += 1,
        }
    }

    if last == 0 {
        Cow::Borrowed(text)
    } else {
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}
