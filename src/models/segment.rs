// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waterway segment model and line geometry handling.

use geo::{LineString, MultiLineString};
use serde_json::Value;

/// One scored waterway segment.
///
/// Every attribute is optional; defaults are substituted when the value is
/// read, not when the segment is loaded.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Opaque segment identifier (e.g., "seg_00001")
    pub segment_id: Option<String>,
    /// Eco score, kept exactly as written in the source document
    pub eco_score: Option<Value>,
    /// Coarse bucket: "good", "medium" or "bad"
    pub category: Option<String>,
    /// Line geometry in WGS84 lon/lat
    pub geometry: Option<SegmentGeometry>,
}

impl Segment {
    /// Tooltip shown when hovering the segment on the map.
    pub fn tooltip(&self) -> String {
        let score = match &self.eco_score {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "?".to_string(),
        };

        format!(
            "{} | score={} | {}",
            self.segment_id.as_deref().unwrap_or(""),
            score,
            self.category.as_deref().unwrap_or("")
        )
    }
}

/// Segment geometry - a single line or a multi-line.
#[derive(Debug, Clone)]
pub enum SegmentGeometry {
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
}

impl SegmentGeometry {
    /// Total number of vertices across all parts.
    pub fn point_count(&self) -> usize {
        match self {
            SegmentGeometry::Line(line) => line.0.len(),
            SegmentGeometry::MultiLine(multi) => multi.0.iter().map(|l| l.0.len()).sum(),
        }
    }

    /// Convert back to a GeoJSON geometry for the map widget.
    pub fn to_geojson(&self) -> geojson::Geometry {
        let value = match self {
            SegmentGeometry::Line(line) => geojson::Value::from(line),
            SegmentGeometry::MultiLine(multi) => geojson::Value::from(multi),
        };
        geojson::Geometry::new(value)
    }
}

/// Ordered set of segments read from one GeoJSON document.
#[derive(Debug, Clone, Default)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
    default_category: Option<&'static str>,
}

impl SegmentCollection {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            default_category: None,
        }
    }

    /// Category used for coloring segments that carry none.
    ///
    /// Only affects styling; `Segment::category` keeps the raw value.
    pub fn with_default_category(mut self, category: &'static str) -> Self {
        self.default_category = Some(category);
        self
    }

    pub fn default_category(&self) -> Option<&'static str> {
        self.default_category
    }

    /// Segments in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
