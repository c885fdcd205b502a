use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::RestError;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn article(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    info!("article request: {}", slug);

    let page = state
        .pages
        .article_page(&slug)
        .await
        .map_err(|e| RestError::from_page(e, state.merge_page_errors))?;

    Ok(Json(page))
}

pub async fn list_articles(
    Query(params): Query<ListParams>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let list = state
        .pages
        .articles(params.category.as_deref())
        .await
        .map_err(|e| RestError::from_page(e, state.merge_page_errors))?;

    Ok(Json(list))
}
