//! portdebt: country debt data to map markers.
//!
//! This crate wires the workspace together so the binary and the integration
//! harnesses can drive the whole flow from one import.
//!
//! # Architecture
//!
//! ```text
//! CSV / JSON ──► portdebt-feeds ──► portdebt-core normalizer ──► encoding ──► export
//! ```
//!
//! Everything runs synchronously on the calling thread.

pub mod export;
pub mod pipeline;

pub use export::{build_markers, write_json, Marker};
pub use pipeline::{load_markers, Options};
pub use portdebt_core::{
    calculate_marker_color, calculate_marker_size, process_port_data, Column, PortRecord,
    RawRecord,
};
