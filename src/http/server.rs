use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::article::ArticlePages;
use crate::http::routes;

#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<ArticlePages>,
    pub merge_page_errors: bool,
}

impl AppState {
    pub fn new(pages: ArticlePages, merge_page_errors: bool) -> Self {
        Self {
            pages: Arc::new(pages),
            merge_page_errors,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/articles", get(routes::list_articles))
        .route("/articles/{slug}", get(routes::article))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
