use std::sync::Arc;

use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Response},
};

use crate::{
    error::CatalogError, info, management::ArtistLookup, types::SearchForm, utils, view, warning,
};

/// `GET /` - the empty search form. Never talks to Spotify.
pub async fn index() -> Html<String> {
    Html(view::render_index(None, None))
}

/// `POST /` - looks up the submitted `artist_name` and renders the result.
///
/// A blank name renders the empty form without any upstream call. A name
/// Spotify does not know renders the empty state with `200 OK`; token and
/// catalog failures render an error page with a 5xx status.
pub async fn search(
    Extension(lookup): Extension<Arc<ArtistLookup>>,
    Form(form): Form<SearchForm>,
) -> Response {
    let Some(artist_name) = utils::normalize_artist_name(&form.artist_name) else {
        return index().await.into_response();
    };

    info!("Looking up \"{}\"", artist_name);

    match lookup.lookup(artist_name).await {
        Ok(artist) => Html(view::render_index(Some(artist_name), Some(&artist))).into_response(),
        Err(e @ CatalogError::NotFound(_)) => e.into_response(),
        Err(e) => {
            warning!("Lookup for \"{}\" failed: {}", artist_name, e);
            e.into_response()
        }
    }
}
