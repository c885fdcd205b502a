use std::error::Error;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::article::PageError;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Article not found")]
    NotFound,

    #[error("Error assembling article page: {0}")]
    Page(#[from] PageError),
}

impl RestError {
    /// Maps a page error, optionally hiding everything behind "not found".
    pub fn from_page(err: PageError, merge: bool) -> Self {
        if merge {
            warn!("reporting page error as not found: {}", err);
            RestError::NotFound
        } else {
            RestError::Page(err)
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Page(PageError::NotFound(_)) => StatusCode::NOT_FOUND,
            RestError::Page(PageError::InvalidSlug(_)) => StatusCode::BAD_REQUEST,
            RestError::Page(PageError::Malformed(_)) => StatusCode::BAD_GATEWAY,
            RestError::Page(PageError::NotAList(_)) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            error!("{}: {:?}", self, self.source());
        }

        let payload = Json(json!({"message": self.to_string()}));

        (status, payload).into_response()
    }
}
