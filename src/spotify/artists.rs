use crate::{
    error::CatalogResult,
    types::{
        Album, AlbumResponse, Artist, RelatedArtistsResponse, SearchResponse, TopTracksResponse,
        Track,
    },
    warning,
};

use super::SpotifyClient;

/// Country used to pick the top tracks of an artist.
pub const TOP_TRACKS_COUNTRY: &str = "US";

impl SpotifyClient {
    /// Searches the catalog for the best matching artist.
    ///
    /// Sends `GET /search` with `q`, `type=artist` and `limit=1`. The query
    /// term is passed as a query parameter, so names containing `&`, `#` or
    /// spaces reach Spotify intact.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Artist))` - the first match
    /// - `Ok(None)` - no artist matched; a diagnostic is printed
    /// - `Err(CatalogError)` - transport failure or non-success status
    ///
    /// # Example
    ///
    /// ```
    /// match catalog.search_for_artist(&token, "Björk").await? {
    ///     Some(artist) => println!("{} ({})", artist.name, artist.id),
    ///     None => println!("nothing found"),
    /// }
    /// ```
    pub async fn search_for_artist(
        &self,
        token: &str,
        artist_name: &str,
    ) -> CatalogResult<Option<Artist>> {
        let url = self.endpoint(&["search"])?;
        let res: SearchResponse = self
            .get_json(
                token,
                url,
                &[("q", artist_name), ("type", "artist"), ("limit", "1")],
            )
            .await?;

        let artist = res.artists.items.into_iter().next();
        if artist.is_none() {
            warning!("No artist found for \"{}\", please try again.", artist_name);
        }

        Ok(artist)
    }

    /// Retrieves the top tracks of an artist in [`TOP_TRACKS_COUNTRY`].
    ///
    /// Returns an empty list when the response has no `tracks` field.
    pub async fn get_songs_by_artist(
        &self,
        token: &str,
        artist_id: &str,
    ) -> CatalogResult<Vec<Track>> {
        let url = self.endpoint(&["artists", artist_id, "top-tracks"])?;
        let res: TopTracksResponse = self
            .get_json(token, url, &[("country", TOP_TRACKS_COUNTRY)])
            .await?;
        Ok(res.tracks)
    }

    /// Retrieves the albums of an artist.
    ///
    /// Returns an empty list when the response has no `items` field.
    pub async fn get_albums_by_artist(
        &self,
        token: &str,
        artist_id: &str,
    ) -> CatalogResult<Vec<Album>> {
        let url = self.endpoint(&["artists", artist_id, "albums"])?;
        let res: AlbumResponse = self.get_json(token, url, &[]).await?;
        Ok(res.items)
    }

    /// Retrieves artists Spotify considers similar to the given one.
    ///
    /// Returns an empty list when the response has no `artists` field.
    pub async fn get_related_artists(
        &self,
        token: &str,
        artist_id: &str,
    ) -> CatalogResult<Vec<Artist>> {
        let url = self.endpoint(&["artists", artist_id, "related-artists"])?;
        let res: RelatedArtistsResponse = self.get_json(token, url, &[]).await?;
        Ok(res.artists)
    }
}
