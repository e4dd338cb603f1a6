//! Read-only catalog listing.

use axum::{extract::State, Json};
use serde::Serialize;

use brandkit_core::catalog::ArchetypeProfile;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontResponse {
    pub family: &'static str,
    pub category: &'static str,
    pub import_url: String,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub archetypes: &'static [ArchetypeProfile],
    pub fonts: Vec<FontResponse>,
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let catalog = state.engine.catalog();
    Json(CatalogResponse {
        archetypes: &catalog.archetypes,
        fonts: catalog
            .fonts
            .iter()
            .map(|f| FontResponse {
                family: f.family,
                category: f.category,
                import_url: f.import_url(),
            })
            .collect(),
    })
}
