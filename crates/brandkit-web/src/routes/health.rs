//! Health probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub fonts: usize,
    pub archetypes: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.engine.catalog();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        fonts: catalog.fonts.len(),
        archetypes: catalog.archetypes.len(),
    })
}
