// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard routes: the HTML shell and the data it renders.

use crate::error::Result;
use crate::html::{DASHBOARD_HTML, DASHBOARD_JS};
use crate::models::page::PageModel;
use crate::services::page::build_page;
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/static/dashboard.js", get(script))
        .route("/api/page", get(get_page))
        .route("/api/segments", get(get_segments))
}

/// Static shell; all content comes from `/api/page`.
async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}

/// Run one render cycle and return the page model.
async fn get_page(State(state): State<Arc<AppState>>) -> Result<Json<PageModel>> {
    let page = render_cycle(state).await?;
    tracing::info!(
        layers = page.map.layers.len(),
        notices = page.notices.len(),
        "Rendered dashboard"
    );
    Ok(Json(page))
}

/// Styled map layers as a GeoJSON FeatureCollection.
async fn get_segments(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let page = render_cycle(state).await?;
    let body = serde_json::to_string(&page.map.to_geojson()).map_err(anyhow::Error::from)?;

    Ok((
        [(header::CONTENT_TYPE, "application/geo+json; charset=utf-8")],
        body,
    ))
}

/// File IO is blocking, so the cycle runs off the async workers.
async fn render_cycle(state: Arc<AppState>) -> Result<PageModel> {
    tokio::task::spawn_blocking(move || build_page(&state.config))
        .await
        .map_err(anyhow::Error::from)?
}
