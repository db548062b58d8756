#![allow(unused)]
//! End-to-end pipeline harness.
//!
//! # What this covers
//!
//! - **Markers**: each surviving row becomes one marker whose size comes from
//!   the debt owed to China and whose colour comes from that debt's share of GNI.
//! - **Options**: `keep_incomplete` bypasses the cleanup, `strict` turns any
//!   defaulted numeric field into an error naming the row and column.
//! - **JSON output**: the written document is a flat array with camelCase keys
//!   and `coordinates: null`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::*;

use portdebt::pipeline::normalize;
use portdebt::{load_markers, write_json, Options};
use portdebt_core::config::Config;
use portdebt_feeds::{CsvSource, JsonSource};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

fn csv_markers(opts: Options) -> anyhow::Result<Vec<portdebt::Marker>> {
    let cfg = Config::defaults();
    let mut source = CsvSource::new(DEBT_CSV.as_bytes(), cfg.source.skip_rows);
    load_markers(&mut source, &cfg, opts)
}

#[test]
fn csv_to_markers() {
    let markers = csv_markers(Options::default()).unwrap();
    let records: Vec<_> = markers.iter().map(|m| m.record.clone()).collect();
    assert_names!(records, DEBT_CSV_COMPLETE);

    let sizes: Vec<f64> = markers.iter().map(|m| m.marker_size).collect();
    assert_eq!(sizes, vec![5.0, 5.0, 5.0, 5.0, 0.5]);

    let angola = &markers[0];
    assert_eq!(angola.marker_color, format!("hsl({}, 100%, 50%)", 120.0 - 24.4 * 1.2));
    let tonga = &markers[4];
    assert_eq!(tonga.marker_color, "hsl(120, 100%, 50%)");
}

#[rstest]
#[case::cleaned(false, 5)]
#[case::kept(true, 7)]
fn keep_incomplete_controls_row_count(#[case] keep_incomplete: bool, #[case] expected: usize) {
    let opts = Options {
        keep_incomplete,
        ..Options::default()
    };
    assert_eq!(csv_markers(opts).unwrap().len(), expected);
}

#[test]
fn strict_mode_lists_every_defaulted_field() {
    let err = csv_markers(Options {
        strict: true,
        ..Options::default()
    })
    .unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("5 field(s) could not be parsed"), "{message}");
    assert!(message.contains(r#"row 3 (Laos): column "Total debt" is not numeric: .."#), "{message}");
    assert!(message.contains(r#"row 4 (Tonga): column "Debt to China" is not numeric: .."#), "{message}");
}

#[test]
fn strict_mode_passes_clean_data() {
    let rows = build_dataset(10);
    let records = normalize(
        rows,
        &Config::defaults(),
        Options {
            strict: true,
            ..Options::default()
        },
    )
    .unwrap();
    assert_eq!(records.len(), 10);
}

#[test]
fn json_to_markers_written_as_json() {
    let cfg = Config::defaults();
    let mut source = JsonSource::new(DEBT_JSON.as_bytes());
    let markers = load_markers(&mut source, &cfg, Options::default()).unwrap();

    let mut out = Vec::new();
    write_json(&mut out, &markers, true).unwrap();
    let written: Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(
        written[0],
        json!({
            "name": "Pakistan",
            "code": "PAK",
            "debtToChina": 26000000000.0,
            "totalDebt": 130000000000.0,
            "gni": 340000000000.0,
            "debtToChinaShare": 7.6,
            "debtToChinaTotalShare": 20.0,
            "coordinates": null,
            "markerSize": 5.0,
            "markerColor": format!("hsl({}, 100%, 50%)", 120.0 - 7.6 * 1.2),
        })
    );
    assert_eq!(written.as_array().map(Vec::len), Some(3));
}
