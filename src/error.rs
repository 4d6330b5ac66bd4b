//! Catalog error types

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::view;

/// Errors raised while looking up an artist in the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Credentials were rejected or the token endpoint could not be used
    #[error("Authentication with Spotify failed: {0}")]
    Authentication(String),

    /// Transport or decoding failure of a catalog request
    #[error("Spotify request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Spotify returned {status} for {endpoint}")]
    UpstreamStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// Configured API base URL cannot be turned into an endpoint
    #[error("Invalid Spotify API url: {0}")]
    InvalidUrl(String),

    /// Search returned no artist
    #[error("No artist found for \"{0}\"")]
    NotFound(String),
}

impl CatalogError {
    /// HTTP status the front-end answers with for this error.
    ///
    /// `NotFound` is a regular empty result and keeps `200 OK`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::OK,
            CatalogError::Upstream(_) | CatalogError::UpstreamStatus { .. } => {
                StatusCode::BAD_GATEWAY
            }
            CatalogError::Authentication(_) | CatalogError::InvalidUrl(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            CatalogError::NotFound(query) => view::render_not_found(query),
            other => view::render_error(status, &other.to_string()),
        };
        (status, Html(body)).into_response()
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
