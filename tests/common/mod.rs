//! Shared test infrastructure: a wiremock stand-in for the Spotify token
//! endpoint and Web API.

#![allow(dead_code)]

use artist_lookup::config::Config;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const ARTIST_X_ID: &str = "artist-x-id";

/// Mock Spotify server for token and catalog requests
pub struct MockSpotify {
    pub server: MockServer,
}

impl MockSpotify {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Configuration pointing both endpoints at the mock server
    pub fn config(&self) -> Config {
        Config::new(CLIENT_ID, CLIENT_SECRET)
            .with_api_url(format!("{}/v1", self.server.uri()))
            .with_token_url(format!("{}/api/token", self.server.uri()))
    }

    /// Expected `Authorization` header of the token request
    pub fn basic_auth() -> String {
        artist_lookup::utils::basic_auth_header(CLIENT_ID, CLIENT_SECRET)
    }

    pub fn bearer() -> String {
        format!("Bearer {}", ACCESS_TOKEN)
    }

    /// Mount a successful client-credentials exchange
    pub async fn mock_token(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(header("authorization", Self::basic_auth().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": ACCESS_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search returning `body` for the query `q`
    pub async fn mock_search(&self, q: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", q))
            .and(query_param("type", "artist"))
            .and(query_param("limit", "1"))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a GET of `/v1/artists/{id}/{resource}` returning `body`
    pub async fn mock_artist_resource(&self, artist_id: &str, resource: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/artists/{}/{}", artist_id, resource)))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount the complete catalog for "Artist X"
    pub async fn mock_artist_x(&self) {
        self.mock_token().await;
        self.mock_search("Artist X", search_body(vec![artist_x_json()])).await;

        Mock::given(method("GET"))
            .and(path(format!("/v1/artists/{}/top-tracks", ARTIST_X_ID)))
            .and(query_param("country", "US"))
            .and(header("authorization", Self::bearer().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": [
                    { "id": "t1", "name": "Hit One", "popularity": 75, "album": { "id": "al1", "name": "First Light" } },
                    { "id": "t2", "name": "Hit Two", "album": { "id": "al2", "name": "Second Wind" } }
                ]
            })))
            .mount(&self.server)
            .await;

        self.mock_artist_resource(
            ARTIST_X_ID,
            "albums",
            json!({
                "items": [
                    { "id": "al1", "name": "First Light", "album_type": "album", "release_date": "2019-05-01", "total_tracks": 10 },
                    { "id": "al2", "name": "Second Wind", "album_type": "single", "release_date": "2021" }
                ]
            }),
        )
        .await;

        self.mock_artist_resource(
            ARTIST_X_ID,
            "related-artists",
            json!({
                "artists": [
                    { "id": "r1", "name": "Artist Y", "genres": ["pop"] },
                    { "id": "r2", "name": "Artist Z" }
                ]
            }),
        )
        .await;
    }
}

pub fn artist_x_json() -> Value {
    json!({
        "id": ARTIST_X_ID,
        "name": "Artist X",
        "genres": ["pop", "rock"],
        "popularity": 80,
        "followers": { "href": null, "total": 1000 },
        "images": [],
        "external_urls": { "spotify": "https://open.spotify.com/artist/artist-x-id" }
    })
}

pub fn search_body(items: Vec<Value>) -> Value {
    json!({
        "artists": {
            "href": "https://api.spotify.com/v1/search",
            "items": items,
            "limit": 1,
            "total": 0
        }
    })
}
