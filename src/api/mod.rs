//! # API Module
//!
//! HTTP endpoints of the artist lookup front-end.
//!
//! ## Endpoints
//!
//! ### Search
//!
//! - [`index`] - `GET /` renders the empty search form.
//! - [`search`] - `POST /` takes the urlencoded form field `artist_name`,
//!   runs the artist lookup and renders the result page.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health` returns status, name and version as JSON.
//!
//! ## Architecture
//!
//! Handlers are plain async functions wired up by [`crate::server::app`].
//! The shared [`crate::management::ArtistLookup`] reaches the search handler
//! as an axum [`Extension`](axum::Extension). Lookup errors turn into
//! responses through the `IntoResponse` implementation of
//! [`crate::error::CatalogError`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use artist_lookup::api::{health, index, search};
//!
//! let app = Router::new()
//!     .route("/", get(index).post(search))
//!     .route("/health", get(health));
//! ```

mod health;
mod search;

pub use health::health;
pub use search::{index, search};
