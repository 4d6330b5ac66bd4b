//! Artist Lookup Library
//!
//! A small web front-end for the Spotify Web API. A user submits an artist
//! name, the server fetches an app token through the client-credentials
//! flow, looks the artist up and renders genres, popularity, followers, top
//! tracks, albums and related artists as an HTML page.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the search page and health check
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - Error type shared by the lookup pipeline
//! - `management` - The artist lookup orchestrating token and catalog calls
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and the page view model
//! - `utils` - Utility functions and helpers
//! - `view` - Server-side HTML rendering
//!
//! # Example
//!
//! ```
//! use artist_lookup::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> artist_lookup::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::Config::from_env()).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// Used by startup code where any error is fatal. The lookup pipeline uses
/// the typed [`error::CatalogResult`] instead.
///
/// # Example
///
/// ```
/// use artist_lookup::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup errors. Request handling never calls it; lookup
/// failures become error pages instead.
///
/// # Example
///
/// ```
/// error!("Server stopped: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("CLIENT_ID is not set");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
