// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Page model for one dashboard render cycle.

use super::map::MapView;
use super::route::RouteTable;
use serde::Serialize;

/// User-visible message attached to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Warning(String),
}

/// Secondary panel below the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutesPanel {
    /// Routes file parsed; show its properties.
    Table { heading: String, table: RouteTable },
    /// Routes file present but unreadable.
    Warning { message: String },
    /// Routes file not there yet.
    Info { message: String },
}

/// Everything the browser shell needs to draw the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub title: String,
    /// Resolved path of the primary input file
    pub caption: String,
    pub notices: Vec<Notice>,
    pub map: MapView,
    /// Map panel height in pixels
    pub map_height: u32,
    pub legend_heading: String,
    pub legend: Vec<String>,
    pub routes: RoutesPanel,
}
