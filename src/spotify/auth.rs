use std::fmt;

use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::Config,
    error::{CatalogError, CatalogResult},
    utils,
};

/// Obtains app-level access tokens through the client-credentials grant.
///
/// Holds the credentials read at startup. Every call to [`get_token`]
/// performs a fresh exchange; nothing is cached between calls.
///
/// [`get_token`]: TokenProvider::get_token
#[derive(Clone)]
pub struct TokenProvider {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenProvider {
    /// Creates a provider for the credentials and token URL of `config`.
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Exchanges the client id and secret for a bearer token.
    ///
    /// Posts `grant_type=client_credentials` to the token endpoint with a
    /// `Basic` authorization header and returns the `access_token` field of
    /// the JSON response.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`CatalogError::Authentication`]:
    /// - the token endpoint cannot be reached
    /// - the endpoint answers with a non-success status, in which case the
    ///   message carries `error_description` (or `error`) of the response
    /// - the body is not JSON or lacks a non-empty `access_token`
    ///
    /// # Example
    ///
    /// ```
    /// let token = provider.get_token().await?;
    /// let artist = catalog.search_for_artist(&token, "Daft Punk").await?;
    /// ```
    pub async fn get_token(&self) -> CatalogResult<String> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Authentication(e.to_string()))?;

        let status = res.status();
        let json: Value = res.json().await.map_err(|e| {
            CatalogError::Authentication(format!("unreadable token response ({}): {}", status, e))
        })?;

        if !status.is_success() {
            let reason = json["error_description"]
                .as_str()
                .or_else(|| json["error"].as_str())
                .unwrap_or("token request rejected");
            return Err(CatalogError::Authentication(format!(
                "{} ({})",
                reason, status
            )));
        }

        match json["access_token"].as_str() {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(CatalogError::Authentication(
                "token response did not contain an access token".to_string(),
            )),
        }
    }
}
