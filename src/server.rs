use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config::Config, management::ArtistLookup, success};

/// Builds the router with all front-end routes.
pub fn app(lookup: Arc<ArtistLookup>) -> Router {
    Router::new()
        .route("/", get(api::index).post(api::search))
        .route("/health", get(api::health))
        .layer(Extension(lookup))
}

/// Binds to `config.server_address` and serves until the process stops.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_address)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_address, e))?;

    let lookup = Arc::new(ArtistLookup::from_config(&config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    success!("Listening on http://{}", addr);
    axum::serve(listener, app(lookup)).await?;
    Ok(())
}
