//! Export: attaches marker encodings to normalised records and writes them
//! out as JSON for the map layer.

use std::io::{self, Write};

use portdebt_core::{MarkerScale, PortRecord};
use serde::Serialize;

/// A normalised record plus the size and colour its map marker is drawn with.
///
/// Serialises flat: the record's own keys followed by `markerSize` and
/// `markerColor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(flatten)]
    pub record: PortRecord,
    pub marker_size: f64,
    pub marker_color: String,
}

impl Marker {
    /// Size from the amount owed to China, colour from that debt's share of GNI.
    pub fn new(record: PortRecord, scale: &MarkerScale) -> Self {
        let marker_size = scale.size(record.debt_to_china);
        let marker_color = scale.color(record.debt_to_china_share).to_string();
        Self {
            record,
            marker_size,
            marker_color,
        }
    }
}

pub fn build_markers(records: &[PortRecord], scale: &MarkerScale) -> Vec<Marker> {
    records
        .iter()
        .cloned()
        .map(|record| Marker::new(record, scale))
        .collect()
}

/// Write `markers` as a JSON array followed by a newline.
pub fn write_json<W: Write>(mut writer: W, markers: &[Marker], pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, markers)?;
    } else {
        serde_json::to_writer(&mut writer, markers)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()
}
