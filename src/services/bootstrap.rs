// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sample data seeding so the map never starts empty.

use std::fs;
use std::path::Path;

/// Three hand-authored Berlin segments, one per category.
pub const SAMPLE_SEGMENTS_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"segment_id": "seg_00001", "eco_score": 85, "category": "good"},
      "geometry": {"type": "LineString", "coordinates": [[13.40, 52.50], [13.45, 52.51]]}
    },
    {
      "type": "Feature",
      "properties": {"segment_id": "seg_00002", "eco_score": 55, "category": "medium"},
      "geometry": {"type": "LineString", "coordinates": [[13.38, 52.51], [13.40, 52.52]]}
    },
    {
      "type": "Feature",
      "properties": {"segment_id": "seg_00003", "eco_score": 30, "category": "bad"},
      "geometry": {"type": "LineString", "coordinates": [[13.46, 52.49], [13.50, 52.50]]}
    }
  ]
}
"#;

/// Write the sample segments to `path` unless a file is already there.
///
/// Parent directories are created as needed. An existing file is never
/// touched, even if it is empty or malformed.
pub fn ensure_sample_data<P: AsRef<Path>>(path: P) -> Result<(), BootstrapError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| BootstrapError::Io {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    fs::write(path, SAMPLE_SEGMENTS_GEOJSON).map_err(|e| BootstrapError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "Seeded sample segments");
    Ok(())
}

/// Errors from sample data seeding.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to write {path}: {reason}")]
    Io { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/data/eco_zones_scored.geojson");

        ensure_sample_data(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, SAMPLE_SEGMENTS_GEOJSON);
    }

    #[test]
    fn test_existing_file_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("eco_zones_scored.geojson");
        fs::write(&path, "not geojson").unwrap();

        ensure_sample_data(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "not geojson");
    }

    #[test]
    fn test_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("eco_zones_scored.geojson");

        ensure_sample_data(&path).unwrap();
        ensure_sample_data(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_SEGMENTS_GEOJSON);
    }

    #[test]
    fn test_sample_is_valid_geojson() {
        let parsed: geojson::GeoJson = SAMPLE_SEGMENTS_GEOJSON.parse().unwrap();
        match parsed {
            geojson::GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 3),
            other => panic!("expected FeatureCollection, got {:?}", other),
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = tmp.path().join("data");
        fs::write(&blocker, "").unwrap();

        let result = ensure_sample_data(blocker.join("eco_zones_scored.geojson"));
        assert!(matches!(result, Err(BootstrapError::Io { .. })));
    }
}
