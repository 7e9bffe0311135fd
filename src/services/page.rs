// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One dashboard render cycle: bootstrap, load, classify, render.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::page::{Notice, PageModel, RoutesPanel};
use crate::services::{bootstrap, loader, render};
use std::path::Path;

pub const PAGE_TITLE: &str = "Race_Publica — Sustainable Waterway Navigation (Berlin MVP)";
pub const MAP_HEIGHT_PX: u32 = 620;
pub const LEGEND_HEADING: &str = "What the colors mean";
pub const LEGEND: [&str; 3] = [
    "🟢 **Good** (≥ 70) — low-conflict, eco-preferred",
    "🟠 **Medium** (40–69) — moderate impact",
    "🔴 **Bad** (< 40) — sensitive/congested",
];
pub const ROUTES_HEADING: &str = "Demo Route Scores";
pub const EMPTY_SEGMENTS_WARNING: &str = "GeoJSON loaded but is empty.";

/// Run a full render cycle against the configured data directory.
///
/// Bootstrap and primary load failures are fatal. Everything about the
/// routes file is reported inside the page instead.
pub fn build_page(config: &Config) -> Result<PageModel> {
    let scored_path = config.scored_path();

    bootstrap::ensure_sample_data(&scored_path)
        .map_err(|e| AppError::Bootstrap(e.to_string()))?;

    let caption = format!("Using: {}", resolve(&scored_path));

    let collection = loader::load_segments(&scored_path).map_err(|e| {
        AppError::DataLoad(format!("Failed to read {}: {}", file_name(&scored_path), e))
    })?;

    let mut notices = Vec::new();
    if collection.is_empty() {
        tracing::warn!(path = %scored_path.display(), "Segment collection is empty");
        notices.push(Notice::Warning(EMPTY_SEGMENTS_WARNING.to_string()));
    }

    let map = render::render_map(&collection);
    let routes = routes_panel(&config.routes_path(), &config.routes_display_path());

    Ok(PageModel {
        title: PAGE_TITLE.to_string(),
        caption,
        notices,
        map,
        map_height: MAP_HEIGHT_PX,
        legend_heading: LEGEND_HEADING.to_string(),
        legend: LEGEND.iter().map(|s| s.to_string()).collect(),
        routes,
    })
}

/// Decide what the routes panel shows. Never fails.
pub fn routes_panel(path: &Path, display_path: &str) -> RoutesPanel {
    if !path.exists() {
        return RoutesPanel::Info {
            message: format!("Waiting for sample demo routes… (`{}`).", display_path),
        };
    }

    match loader::load_route_table(path) {
        Ok(table) => RoutesPanel::Table {
            heading: ROUTES_HEADING.to_string(),
            table,
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read routes");
            RoutesPanel::Warning {
                message: format!("Could not read routes: {}", e),
            }
        }
    }
}

fn resolve(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
