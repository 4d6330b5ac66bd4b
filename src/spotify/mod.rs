//! # Spotify Integration Module
//!
//! This module is the integration layer between the web front-end and the
//! Spotify Web API. It covers the two pieces of real logic in the program:
//! obtaining an app-level access token and reading artist metadata.
//!
//! ## Architecture
//!
//! ```text
//! Request Handler (api)
//!          ↓
//! Artist Lookup (management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Artist Operations (search, top tracks, albums, related artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the client-credentials grant:
//! - Sends `Basic base64(client_id:client_secret)` to the token endpoint
//! - Returns the `access_token` of the response
//! - Fetches a new token on every call; tokens are never cached or refreshed
//!
//! ### Artist Module
//!
//! [`artists`] - One GET request per operation, each authenticated with
//! `Authorization: Bearer <token>`:
//! - `GET /search?q=<name>&type=artist&limit=1`
//! - `GET /artists/{id}/top-tracks?country=US`
//! - `GET /artists/{id}/albums`
//! - `GET /artists/{id}/related-artists`
//!
//! ## Error Handling
//!
//! All operations return [`CatalogResult`]:
//! - Token endpoint problems of any kind become [`CatalogError::Authentication`]
//! - Transport and decode failures become [`CatalogError::Upstream`]
//! - Non-success statuses become [`CatalogError::UpstreamStatus`]
//!
//! Missing JSON fields are not errors. Every response envelope deserializes
//! with defaults, so an absent list reads as an empty list.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let http = spotify::http_client()?;
//! let tokens = spotify::auth::TokenProvider::new(http.clone(), &config);
//! let catalog = spotify::SpotifyClient::new(http, &config.api_url);
//!
//! let token = tokens.get_token().await?;
//! if let Some(artist) = catalog.search_for_artist(&token, "Radiohead").await? {
//!     let tracks = catalog.get_songs_by_artist(&token, &artist.id).await?;
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};

pub mod artists;
pub mod auth;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Builds the HTTP client shared by the token provider and the catalog
/// client.
pub fn http_client() -> CatalogResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Read-only client for the Spotify Web API artist endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// Appends `segments` to the API base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends an authenticated GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        url: Url,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        let endpoint = url.path().to_string();
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        // A retired endpoint (e.g. a 404 from related-artists) fails the
        // request like any other status; it is not read as an empty list.
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus { endpoint, status });
        }

        Ok(response.json::<T>().await?)
    }
}
