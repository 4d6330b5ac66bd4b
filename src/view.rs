//! Server-side HTML rendering of the search page.
//!
//! Every page is the search form followed by one of: nothing (idle), an
//! empty-state notice, the artist block or an error message. All text that
//! originates from the user or from Spotify goes through
//! [`escape_html`].

use axum::http::StatusCode;

use crate::{
    types::{Album, Artist, ArtistInfo, Track},
    utils::{escape_html, format_count},
};

/// Shown in place of a missing popularity value.
pub const POPULARITY_NOT_AVAILABLE: &str = "N/A";

/// Formats a popularity value, falling back to [`POPULARITY_NOT_AVAILABLE`].
pub fn popularity_label(popularity: Option<u32>) -> String {
    popularity
        .map(|p| p.to_string())
        .unwrap_or_else(|| POPULARITY_NOT_AVAILABLE.to_string())
}

/// Renders the search page, with the artist block when `artist` is given.
pub fn render_index(query: Option<&str>, artist: Option<&ArtistInfo>) -> String {
    let body = artist.map(render_artist).unwrap_or_default();
    page(query, &body)
}

/// Renders the search page with the "nothing found" notice.
pub fn render_not_found(query: &str) -> String {
    let body = format!(
        r#"<p class="empty">No artist found for &quot;{}&quot;, please try again.</p>"#,
        escape_html(query)
    );
    page(Some(query), &body)
}

/// Renders the search page with an error message.
pub fn render_error(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<div class="error"><h2>Something went wrong ({})</h2><p>{}</p></div>"#,
        status.as_u16(),
        escape_html(message)
    );
    page(None, &body)
}

fn page(query: Option<&str>, body: &str) -> String {
    let value = query.map(escape_html).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Artist Lookup</title>
</head>
<body>
<h1>Artist Lookup</h1>
<form method="post" action="/">
<input type="text" name="artist_name" placeholder="Artist name" value="{value}" required>
<button type="submit">Search</button>
</form>
{body}
</body>
</html>
"#
    )
}

fn render_artist(info: &ArtistInfo) -> String {
    let genres = if info.genres.is_empty() {
        "No genres listed".to_string()
    } else {
        escape_html(&info.genres)
    };

    let mut out = format!(
        r#"<section class="artist">
<h2>{name}</h2>
<p><strong>Genres:</strong> {genres}</p>
<p><strong>Popularity:</strong> {popularity}</p>
<p><strong>Followers:</strong> {followers}</p>
"#,
        name = escape_html(&info.name),
        genres = genres,
        popularity = popularity_label(info.popularity),
        followers = format_count(info.followers),
    );

    list(&mut out, "Top Tracks", &info.tracks, track_item);
    list(&mut out, "Albums", &info.albums, album_item);
    list(&mut out, "Related Artists", &info.related_artists, related_item);

    out.push_str("</section>");
    out
}

fn list<T>(out: &mut String, title: &str, items: &[T], item: fn(&T) -> String) {
    out.push_str(&format!("<h3>{}</h3>\n", title));
    if items.is_empty() {
        out.push_str("<p>None</p>\n");
        return;
    }

    out.push_str("<ul>\n");
    for entry in items {
        out.push_str(&format!("<li>{}</li>\n", item(entry)));
    }
    out.push_str("</ul>\n");
}

fn track_item(track: &Track) -> String {
    if track.album.name.is_empty() {
        escape_html(&track.name)
    } else {
        format!(
            "{} <em>({})</em>",
            escape_html(&track.name),
            escape_html(&track.album.name)
        )
    }
}

fn album_item(album: &Album) -> String {
    let mut details = Vec::new();
    if !album.album_type.is_empty() {
        details.push(escape_html(&album.album_type));
    }
    if !album.release_date.is_empty() {
        details.push(escape_html(&album.release_date));
    }

    if details.is_empty() {
        escape_html(&album.name)
    } else {
        format!("{} <em>({})</em>", escape_html(&album.name), details.join(", "))
    }
}

fn related_item(artist: &Artist) -> String {
    escape_html(&artist.name)
}
