//! Tabular segment records and JSON output helpers.
//!
//! Segment catalogs arrive as rows with endpoint columns `x0..z1` and
//! center columns `cx,cy,cz`; [`SegmentRecord`] mirrors that row contract
//! and converts into the core [`Segment`] type. File-format parsing of
//! simulation snapshots themselves lives outside this crate.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::profile::Segment;

/// One row of a segment catalog.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
}

impl SegmentRecord {
    /// Build the core segment: axis endpoints plus independent center.
    pub fn segment(&self) -> Segment {
        Segment {
            p0: Vector3::new(self.x0, self.y0, self.z0),
            p1: Vector3::new(self.x1, self.y1, self.z1),
            center: Vector3::new(self.cx, self.cy, self.cz),
        }
    }
}

/// Read a JSON array of segment records from disk.
pub fn load_segment_records(path: &Path) -> Result<Vec<SegmentRecord>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))
}

/// Pretty-print a serializable value to a JSON file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builds_segment_with_independent_center() {
        let row: SegmentRecord = serde_json::from_str(
            r#"{"x0": 0.0, "y0": 0.0, "z0": 0.0,
                "x1": 0.0, "y1": 0.0, "z1": 4.0,
                "cx": 1.0, "cy": 2.0, "cz": 3.0}"#,
        )
        .unwrap();
        let seg = row.segment();
        assert_eq!(seg.axis(), Vector3::new(0.0, 0.0, 4.0));
        assert_eq!(seg.center, Vector3::new(1.0, 2.0, 3.0));
    }
}
