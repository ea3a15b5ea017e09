use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use paradise_core::{CatalogEntry, Category, CoreError};
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub category: Category,
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/catalog", get(list_categories))
        .route("/v1/catalog/{category}", get(list_catalog))
}

async fn list_categories() -> Json<Vec<CategorySummary>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategorySummary {
                category: *c,
                title: c.title(),
            })
            .collect(),
    )
}

async fn list_catalog(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<CatalogResponse>, AppError> {
    let category: Category = raw
        .parse()
        .map_err(|e: CoreError| AppError::NotFoundError(e.to_string()))?;

    let entries = state.catalog.list(category).await?;
    debug!(%category, count = entries.len(), "Catalog listed");

    Ok(Json(CatalogResponse {
        category,
        title: category.title(),
        entries,
    }))
}
