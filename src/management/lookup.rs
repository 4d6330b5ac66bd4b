use crate::{
    config::Config,
    error::{CatalogError, CatalogResult},
    info,
    spotify::{self, SpotifyClient, auth::TokenProvider},
    types::ArtistInfo,
};

/// Resolves an artist name into the data shown on the result page.
///
/// Built once at startup and shared by all requests. Each lookup fetches a
/// new token and then issues the catalog calls one after another.
#[derive(Debug, Clone)]
pub struct ArtistLookup {
    tokens: TokenProvider,
    catalog: SpotifyClient,
}

impl ArtistLookup {
    /// Creates a lookup from an existing token provider and catalog client.
    pub fn new(tokens: TokenProvider, catalog: SpotifyClient) -> Self {
        Self { tokens, catalog }
    }

    /// Builds the token provider and catalog client of `config` on one shared HTTP client.
    pub fn from_config(config: &Config) -> CatalogResult<Self> {
        let http = spotify::http_client()?;
        Ok(Self::new(
            TokenProvider::new(http.clone(), config),
            SpotifyClient::new(http, &config.api_url),
        ))
    }

    /// Looks up `artist_name` and assembles its [`ArtistInfo`].
    ///
    /// Order of calls: token, search, top tracks, albums, related artists.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] when the search has no match
    /// - [`CatalogError::Authentication`] when no token could be obtained
    /// - [`CatalogError::Upstream`] / [`CatalogError::UpstreamStatus`] when a
    ///   catalog call fails
    pub async fn lookup(&self, artist_name: &str) -> CatalogResult<ArtistInfo> {
        let token = self.tokens.get_token().await?;

        let Some(artist) = self.catalog.search_for_artist(&token, artist_name).await? else {
            return Err(CatalogError::NotFound(artist_name.to_string()));
        };

        info!("Found {} ({}) for \"{}\"", artist.name, artist.id, artist_name);

        let tracks = self.catalog.get_songs_by_artist(&token, &artist.id).await?;
        let albums = self.catalog.get_albums_by_artist(&token, &artist.id).await?;
        let related = self.catalog.get_related_artists(&token, &artist.id).await?;

        Ok(ArtistInfo::new(artist, tracks, albums, related))
    }
}
