// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waterway Eco Map: scored waterway segments on an interactive map
//!
//! This crate serves a small dashboard that draws hand-authored waterway
//! segments color-coded by eco score category, plus an optional table of
//! demo route scores.

pub mod config;
pub mod error;
pub mod html;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
