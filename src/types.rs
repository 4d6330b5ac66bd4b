use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
    pub followers: Followers,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
    pub preview_url: Option<String>,
    pub album: TrackAlbum,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackAlbum {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub album_type: String,
    pub release_date: String,
    pub total_tracks: Option<u32>,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumResponse {
    pub items: Vec<Album>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedArtistsResponse {
    pub artists: Vec<Artist>,
}

/// Flattened artist data handed to the page renderer for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistInfo {
    pub name: String,
    pub genres: String,
    pub popularity: Option<u32>,
    pub followers: u64,
    pub tracks: Vec<Track>,
    pub albums: Vec<Album>,
    pub related_artists: Vec<Artist>,
}

impl ArtistInfo {
    pub fn new(
        artist: Artist,
        tracks: Vec<Track>,
        albums: Vec<Album>,
        related_artists: Vec<Artist>,
    ) -> Self {
        Self {
            genres: artist.genres.join(", "),
            name: artist.name,
            popularity: artist.popularity,
            followers: artist.followers.total,
            tracks,
            albums,
            related_artists,
        }
    }
}

/// Form body posted by the search form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub artist_name: String,
}
