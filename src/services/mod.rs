// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod bootstrap;
pub mod classifier;
pub mod loader;
pub mod page;
pub mod render;

pub use bootstrap::{ensure_sample_data, BootstrapError};
pub use classifier::{classify, BucketColor};
pub use loader::{load_route_table, load_segments, LoadError};
pub use page::build_page;
pub use render::render_map;
