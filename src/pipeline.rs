//! Pipeline: source ──► cleanup ──► normalizer ──► markers.

use anyhow::Context;
use portdebt_core::config::Config;
use portdebt_core::{process_port_data, process_port_data_checked, MarkerScale, PortRecord, RawRecord};
use portdebt_feeds::{drop_incomplete, RecordSource};

use crate::export::{build_markers, Marker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep rows that lack a required column.
    pub keep_incomplete: bool,
    /// Fail instead of defaulting unparseable numeric fields.
    pub strict: bool,
}

/// Read `source` to completion and turn it into markers.
pub fn load_markers(
    source: &mut dyn RecordSource,
    cfg: &Config,
    opts: Options,
) -> anyhow::Result<Vec<Marker>> {
    let kind = source.kind();
    let rows = source
        .read_records()
        .with_context(|| format!("reading {kind} records"))?;
    let records = normalize(rows, cfg, opts)?;
    Ok(build_markers(&records, &MarkerScale::from(&cfg.encoding)))
}

/// Clean and normalise already-loaded rows.
pub fn normalize(
    rows: Vec<RawRecord>,
    cfg: &Config,
    opts: Options,
) -> anyhow::Result<Vec<PortRecord>> {
    let rows = if opts.keep_incomplete {
        rows
    } else {
        drop_incomplete(rows, &cfg.source.required_columns)
    };

    if !opts.strict {
        return Ok(process_port_data(&rows));
    }

    let mut problems = Vec::new();
    let mut records = Vec::with_capacity(rows.len());
    for (index, checked) in process_port_data_checked(&rows).into_iter().enumerate() {
        let name = checked.record.name.clone().unwrap_or_else(|| "?".to_string());
        match checked.into_result() {
            Ok(record) => records.push(record),
            Err(defaults) => {
                for default in defaults {
                    tracing::warn!(row = index, %name, column = %default.column, "field defaulted");
                    problems.push(format!("row {index} ({name}): {default}"));
                }
            }
        }
    }

    if !problems.is_empty() {
        anyhow::bail!(
            "{} field(s) could not be parsed:\n  {}",
            problems.len(),
            problems.join("\n  ")
        );
    }
    Ok(records)
}
