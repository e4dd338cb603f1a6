//! Design kit generation handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use brandkit_core::{BrandInput, UxKit};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<BrandInput>, JsonRejection>,
) -> Result<Json<UxKit>, ApiError> {
    let Json(input) = payload?;
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("generate", %request_id, brand = %input.name.trim());

    // Generation is pure CPU work; keep it off the async workers.
    let engine = state.engine.clone();
    let kit = tokio::task::spawn_blocking(move || span.in_scope(|| engine.generate(&input)))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Generation task failed");
            ApiError::Internal
        })??;

    Ok(Json(kit))
}
