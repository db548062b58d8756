//! portdebt-core: record normalisation and marker encoding.
//!
//! This crate turns raw debt-statistics rows into typed records and derives
//! the marker size and colour a map layer draws for each country.
//!
//! # Architecture
//!
//! ```text
//! RawRecord ──► normalizer ──► PortRecord ──► encoding ──► size / Hsl
//! ```
//!
//! Everything here is pure and synchronous; there is no I/O outside of
//! [`config::Config::load`].

pub mod config;
pub mod encoding;
pub mod error;
pub mod normalizer;
pub mod types;

pub use encoding::{calculate_marker_color, calculate_marker_size, Hsl, MarkerScale};
pub use error::FieldError;
pub use normalizer::{
    normalize_record, normalize_record_checked, parse_field, process_port_data,
    process_port_data_checked, CheckedRecord, FieldDefault,
};
pub use types::{Column, Coordinates, PortRecord, RawRecord};
