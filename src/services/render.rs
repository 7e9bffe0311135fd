// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map view construction from scored segments.

use crate::models::map::{LayerGroup, MapLayer, MapView, StrokeStyle};
use crate::models::segment::SegmentCollection;
use crate::services::classifier::{classify, BucketColor};

/// Berlin city center as `[lat, lon]`.
pub const MAP_CENTER: [f64; 2] = [52.52, 13.405];
pub const MAP_ZOOM: u8 = 12;
pub const OSM_TILES: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const STROKE_WEIGHT: u32 = 3;
pub const STROKE_OPACITY: f64 = 0.9;

/// Build the map view: one styled layer per segment that has geometry.
///
/// Layers follow document order, so later segments draw on top. Segments
/// without a category are colored by the collection's default category, if
/// it has one; their tooltips still show the raw (empty) category.
pub fn render_map(collection: &SegmentCollection) -> MapView {
    let mut layers = Vec::with_capacity(collection.len());
    let default_category = collection.default_category();

    for segment in collection.segments() {
        let Some(geometry) = &segment.geometry else {
            tracing::debug!(
                segment_id = segment.segment_id.as_deref().unwrap_or(""),
                "Skipping segment without geometry"
            );
            continue;
        };

        let style = StrokeStyle {
            color: classify(segment.category.as_deref().or(default_category)),
            weight: STROKE_WEIGHT,
            opacity: STROKE_OPACITY,
        };

        layers.push(MapLayer {
            geometry: geometry.to_geojson(),
            style,
            tooltip: segment.tooltip(),
        });
    }

    let groups = BucketColor::ALL
        .iter()
        .map(|&color| LayerGroup {
            color,
            label: color.label(),
            count: layers.iter().filter(|l| l.style.color == color).count(),
        })
        .filter(|g| g.count > 0)
        .collect();

    MapView {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        tiles: OSM_TILES,
        attribution: OSM_ATTRIBUTION,
        layers,
        groups,
    }
}
