// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON loading for scored segments and route tables.

use crate::models::route::RouteTable;
use crate::models::segment::{Segment, SegmentCollection, SegmentGeometry};
use geo::{LineString, MultiLineString};
use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Category used for coloring when the dataset carries no category at all.
pub const DEFAULT_CATEGORY: &str = "medium";

/// Load scored segments from a GeoJSON file.
pub fn load_segments<P: AsRef<Path>>(path: P) -> Result<SegmentCollection, LoadError> {
    let json_data = read_file(path.as_ref())?;
    load_segments_from_json(&json_data)
}

/// Load scored segments from a GeoJSON string.
///
/// An empty feature collection is a valid result; callers decide how to
/// surface it.
pub fn load_segments_from_json(json_data: &str) -> Result<SegmentCollection, LoadError> {
    let collection = parse_collection(json_data)?;

    let has_category = collection
        .features
        .iter()
        .any(|f| f.contains_property("category"));

    let mut segments = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let segment_id = feature.property("segment_id").and_then(property_string);

        let eco_score = feature
            .property("eco_score")
            .filter(|v| !v.is_null())
            .cloned();

        let category = feature
            .property("category")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let geometry = match feature.geometry {
            Some(geom) => Some(convert_geometry(geom.value)?),
            None => None,
        };

        segments.push(Segment {
            segment_id,
            eco_score,
            category,
            geometry,
        });
    }

    tracing::debug!(count = segments.len(), has_category, "Loaded segments");
    let collection = SegmentCollection::new(segments);
    if has_category {
        Ok(collection)
    } else {
        Ok(collection.with_default_category(DEFAULT_CATEGORY))
    }
}

/// Load a route table (all non-geometry properties) from a GeoJSON file.
pub fn load_route_table<P: AsRef<Path>>(path: P) -> Result<RouteTable, LoadError> {
    let json_data = read_file(path.as_ref())?;
    load_route_table_from_json(&json_data)
}

/// Load a route table from a GeoJSON string. Any geometry type is accepted.
pub fn load_route_table_from_json(json_data: &str) -> Result<RouteTable, LoadError> {
    let collection = parse_collection(json_data)?;

    let table = RouteTable::from_properties(
        collection
            .features
            .into_iter()
            .map(|f| f.properties.unwrap_or_default()),
    );

    tracing::debug!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "Loaded route table"
    );
    Ok(table)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::IoError(format!("{}: {}", path.display(), e)))
}

fn parse_collection(json_data: &str) -> Result<FeatureCollection, LoadError> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| LoadError::ParseError(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) => Err(LoadError::NotFeatureCollection("Feature")),
        GeoJson::Geometry(_) => Err(LoadError::NotFeatureCollection("Geometry")),
    }
}

/// Convert GeoJSON geometry to our internal line format.
fn convert_geometry(value: geojson::Value) -> Result<SegmentGeometry, LoadError> {
    use std::convert::TryInto;

    let kind = geometry_kind(&value);

    let line_result: Result<LineString<f64>, _> = value.clone().try_into();
    if let Ok(line) = line_result {
        return Ok(SegmentGeometry::Line(line));
    }

    let multi_result: Result<MultiLineString<f64>, _> = value.try_into();
    if let Ok(multi) = multi_result {
        return Ok(SegmentGeometry::MultiLine(multi));
    }

    Err(LoadError::UnsupportedGeometry(kind))
}

fn geometry_kind(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn property_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Errors from GeoJSON loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Expected a FeatureCollection, found a {0}")]
    NotFeatureCollection(&'static str),

    #[error("Unsupported geometry type {0} (expected LineString or MultiLineString)")]
    UnsupportedGeometry(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::bootstrap::SAMPLE_SEGMENTS_GEOJSON;
    use serde_json::json;

    #[test]
    fn test_sample_loads_in_order() {
        let collection = load_segments_from_json(SAMPLE_SEGMENTS_GEOJSON).unwrap();
        let ids: Vec<_> = collection
            .segments()
            .iter()
            .map(|s| s.segment_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["seg_00001", "seg_00002", "seg_00003"]);

        for segment in collection.segments() {
            assert!(segment.eco_score.is_some());
            assert!(segment.category.is_some());
            assert_eq!(segment.geometry.as_ref().unwrap().point_count(), 2);
        }
    }

    #[test]
    fn test_empty_collection_is_ok() {
        let collection =
            load_segments_from_json(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let result = load_segments_from_json("{\"type\": \"FeatureCollection\", ");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }

    #[test]
    fn test_bare_geometry_rejected() {
        let result =
            load_segments_from_json(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#);
        assert!(matches!(
            result,
            Err(LoadError::NotFeatureCollection("Geometry"))
        ));
    }

    #[test]
    fn test_point_geometry_rejected() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"segment_id": "p1"},
                "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}
            }]
        });
        let result = load_segments_from_json(&doc.to_string());
        assert!(matches!(result, Err(LoadError::UnsupportedGeometry("Point"))));
    }

    #[test]
    fn test_multilinestring_accepted() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"segment_id": "m1", "eco_score": 61.5, "category": "medium"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[13.4, 52.5], [13.41, 52.51]], [[13.42, 52.5], [13.43, 52.5]]]
                }
            }]
        });
        let collection = load_segments_from_json(&doc.to_string()).unwrap();
        let segment = &collection.segments()[0];
        assert!(matches!(
            segment.geometry,
            Some(SegmentGeometry::MultiLine(_))
        ));
        assert_eq!(segment.tooltip(), "m1 | score=61.5 | medium");
    }

    #[test]
    fn test_missing_category_column_keeps_raw_value() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"segment_id": "s1", "eco_score": 50},
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
            }]
        });
        let collection = load_segments_from_json(&doc.to_string()).unwrap();
        assert_eq!(collection.segments()[0].category, None);
        assert_eq!(collection.default_category(), Some(DEFAULT_CATEGORY));
        assert_eq!(collection.segments()[0].tooltip(), "s1 | score=50 | ");
    }

    #[test]
    fn test_category_column_present_has_no_default() {
        let collection = load_segments_from_json(SAMPLE_SEGMENTS_GEOJSON).unwrap();
        assert_eq!(collection.default_category(), None);
    }

    #[test]
    fn test_non_numeric_score_kept_as_written() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"segment_id": "s1", "eco_score": "n/a", "category": "bad"},
                    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                },
                {
                    "type": "Feature",
                    "properties": {"segment_id": "s2", "eco_score": null, "category": "bad"},
                    "geometry": {"type": "LineString", "coordinates": [[1, 1], [2, 2]]}
                }
            ]
        });
        let collection = load_segments_from_json(&doc.to_string()).unwrap();
        assert_eq!(collection.segments()[0].tooltip(), "s1 | score=n/a | bad");
        assert_eq!(collection.segments()[1].tooltip(), "s2 | score=? | bad");
    }

    #[test]
    fn test_missing_category_on_one_feature_stays_missing() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"segment_id": "s1", "category": "good"},
                    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                },
                {
                    "type": "Feature",
                    "properties": {"segment_id": "s2"},
                    "geometry": {"type": "LineString", "coordinates": [[1, 1], [2, 2]]}
                }
            ]
        });
        let collection = load_segments_from_json(&doc.to_string()).unwrap();
        assert_eq!(collection.segments()[1].category, None);
        assert_eq!(collection.segments()[1].tooltip(), "s2 | score=? | ");
    }

    #[test]
    fn test_null_geometry_kept() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"segment_id": "g0", "eco_score": 10, "category": "bad"},
                "geometry": null
            }]
        });
        let collection = load_segments_from_json(&doc.to_string()).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.segments()[0].geometry.is_none());
    }

    #[test]
    fn test_route_table_ignores_geometry_type() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"route_id": "r1", "total_score": 77.2},
                    "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}
                },
                {
                    "type": "Feature",
                    "properties": {"route_id": "r2", "total_score": 41},
                    "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                }
            ]
        });
        let table = load_route_table_from_json(&doc.to_string()).unwrap();
        assert_eq!(table.columns, vec!["route_id", "total_score"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][1], json!(41));
    }

    #[test]
    fn test_missing_file() {
        let result = load_segments("/nonexistent/eco_zones_scored.geojson");
        assert!(matches!(result, Err(LoadError::IoError(_))));
    }
}
