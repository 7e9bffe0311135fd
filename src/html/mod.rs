// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Embedded static assets for the dashboard page.
//!
//! The shell and its script are bundled into the binary; the page fetches
//! its content from `/api/page` on every load.

pub mod dashboard;

pub use dashboard::{DASHBOARD_HTML, DASHBOARD_JS};
