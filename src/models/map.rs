// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Interactive map view handed to the browser map widget.

use crate::services::classifier::BucketColor;
use serde::Serialize;

/// Stroke style for one map layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: BucketColor,
    pub weight: u32,
    pub opacity: f64,
}

/// One drawn segment: its geometry, style and hover text.
#[derive(Debug, Clone, Serialize)]
pub struct MapLayer {
    pub geometry: geojson::Geometry,
    pub style: StrokeStyle,
    pub tooltip: String,
}

/// Show/hide toggle covering every layer of one color bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerGroup {
    pub color: BucketColor,
    pub label: &'static str,
    pub count: usize,
}

/// Map widget state: viewport, tile source and the layers to draw.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    /// Map center as `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// Tile URL template for the base layer
    pub tiles: &'static str,
    pub attribution: &'static str,
    pub layers: Vec<MapLayer>,
    /// Buckets present among the layers, in legend order
    pub groups: Vec<LayerGroup>,
}

impl MapView {
    /// Flatten the layers into a styled GeoJSON FeatureCollection.
    ///
    /// Style and tooltip are carried as feature properties so any GeoJSON
    /// consumer can draw the map without this crate's types.
    pub fn to_geojson(&self) -> geojson::FeatureCollection {
        let features = self
            .layers
            .iter()
            .map(|layer| {
                let mut props = geojson::JsonObject::new();
                props.insert("color".to_string(), layer.style.color.as_str().into());
                props.insert("weight".to_string(), layer.style.weight.into());
                props.insert("opacity".to_string(), layer.style.opacity.into());
                props.insert("tooltip".to_string(), layer.tooltip.clone().into());

                geojson::Feature {
                    bbox: None,
                    geometry: Some(layer.geometry.clone()),
                    id: None,
                    properties: Some(props),
                    foreign_members: None,
                }
            })
            .collect();

        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
