// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use tempfile::TempDir;
use waterway_eco_map::config::Config;
use waterway_eco_map::routes::create_router;
use waterway_eco_map::AppState;

/// Create a test app backed by a fresh scratch data directory.
/// Returns the router and the directory guard (dropping it removes the files).
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, TempDir) {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let app = create_test_app_in(&data_dir);
    (app, data_dir)
}

/// Create a test app reading from an existing data directory.
#[allow(dead_code)]
pub fn create_test_app_in(data_dir: &TempDir) -> axum::Router {
    let config = Config {
        data_dir: data_dir.path().to_path_buf(),
        ..Config::default()
    };
    let state = Arc::new(AppState { config });
    create_router(state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
