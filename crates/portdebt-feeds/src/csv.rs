//! CSV source.
//!
//! The published debt spreadsheet export carries a title and a blank line
//! above the header row, so `skip_rows` physical lines are discarded before
//! the header is read. Cells stay as strings; empty cells become `null`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use portdebt_core::RawRecord;
use serde_json::{Map, Value};

use crate::{RecordSource, SourceError, SourceKind};

pub struct CsvSource<R> {
    reader: Option<BufReader<R>>,
    skip_rows: usize,
}

impl CsvSource<File> {
    pub fn open(path: &Path, skip_rows: usize) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, skip_rows))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn new(reader: R, skip_rows: usize) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            skip_rows,
        }
    }
}

impl<R: Read> RecordSource for CsvSource<R> {
    fn kind(&self) -> SourceKind {
        SourceKind::Csv
    }

    fn read_records(&mut self) -> Result<Vec<RawRecord>, SourceError> {
        let mut input = self.reader.take().ok_or(SourceError::Exhausted)?;

        let mut discard = String::new();
        for _ in 0..self.skip_rows {
            discard.clear();
            if input.read_line(&mut discard)? == 0 {
                break;
            }
        }

        let mut reader = ::csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let mut map = Map::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                if header.is_empty() {
                    continue;
                }
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                map.insert(header.clone(), value);
            }
            records.push(RawRecord::from(map));
        }

        tracing::debug!(
            skipped = self.skip_rows,
            columns = headers.len(),
            rows = records.len(),
            "read csv"
        );
        Ok(records)
    }
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}
