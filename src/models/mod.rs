// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod map;
pub mod page;
pub mod route;
pub mod segment;

pub use map::{LayerGroup, MapLayer, MapView, StrokeStyle};
pub use page::{Notice, PageModel, RoutesPanel};
pub use route::RouteTable;
pub use segment::{Segment, SegmentCollection, SegmentGeometry};
