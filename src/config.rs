//! Configuration management for the artist lookup front-end.
//!
//! Configuration is read once at process start into an immutable [`Config`]
//! and handed to the components that need it. Values come from:
//! 1. Environment variables (highest priority)
//! 2. A `.env` file in the working directory
//! 3. A `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

/// Environment variable holding the Spotify client id.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
/// Environment variable holding the Spotify client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
/// Environment variable holding the bind address of the web server.
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";
/// Environment variable overriding the Spotify Web API base URL.
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
/// Environment variable overriding the Spotify token endpoint.
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the current working directory first and then
/// in the platform-specific local data directory under `artist-lookup/.env`.
/// `dotenv` never overrides a variable that is already set, so the process
/// environment always wins, followed by the working directory file.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/artist-lookup/.env`
/// - macOS: `~/Library/Application Support/artist-lookup/.env`
/// - Windows: `%LOCALAPPDATA%/artist-lookup/.env`
///
/// # Errors
///
/// Missing files are not an error. A file that exists but cannot be parsed
/// is reported as an error string.
///
/// # Example
///
/// ```
/// use artist_lookup::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    load_env_from(&[PathBuf::from(".env"), env_file_path()]).await
}

/// Loads each existing file of `paths` in order.
///
/// Earlier files take precedence over later ones, and every file yields to
/// variables already present in the process environment. Paths that do not
/// exist are skipped.
pub async fn load_env_from(paths: &[PathBuf]) -> Result<(), String> {
    for path in paths {
        if async_fs::metadata(path).await.is_err() {
            continue;
        }
        dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    Ok(())
}

/// Returns the path of the `.env` file in the local data directory.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(env!("CARGO_PKG_NAME"));
    path.push(".env");
    path
}

/// Immutable runtime configuration.
///
/// Built once at startup and shared read-only afterwards. Missing
/// credentials are kept as empty strings: they are not validated here and
/// surface as an authentication failure on the first lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub server_address: String,
    pub api_url: String,
    pub token_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("server_address", &self.server_address)
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl Config {
    /// Creates a configuration with the given credentials and default
    /// endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset for the optional settings, so an empty
    /// `SERVER_ADDRESS=` line in a `.env` file falls back to the default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            client_id: lookup(CLIENT_ID_VAR).unwrap_or_default(),
            client_secret: lookup(CLIENT_SECRET_VAR).unwrap_or_default(),
            server_address: optional(SERVER_ADDRESS_VAR, DEFAULT_SERVER_ADDRESS),
            api_url: optional(API_URL_VAR, DEFAULT_API_URL),
            token_url: optional(TOKEN_URL_VAR, DEFAULT_TOKEN_URL),
        }
    }

    /// Points catalog requests at another base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Points token requests at another endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Returns the names of required variables that are empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_empty() {
            missing.push(CLIENT_ID_VAR);
        }
        if self.client_secret.is_empty() {
            missing.push(CLIENT_SECRET_VAR);
        }
        missing
    }
}
