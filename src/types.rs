use chrono::Utc;
use serde::{Deserialize, Serialize};

/// OAuth token bundle as returned by the Spotify accounts service, plus the
/// timestamp it was obtained at. Stored whole in the session store and
/// replaced wholesale, never mutated field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

impl Token {
    /// Whether the access token has outlived its advertised lifetime. There
    /// is no refresh path; an expired token reads as "not logged in".
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

/// Body of a `POST /chat` request. A missing mood is treated as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub mood: Option<String>,
}

/// Body of a `POST /chat` response. Logical failures keep the 200 status and
/// speak through `reply` with an empty song list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub songs: Vec<Song>,
}

/// A recommended song as presented to the chat client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub image: Option<String>,
    pub preview: Option<String>,
}

impl Song {
    /// Flattens a Spotify track object into the chat wire shape: first artist
    /// name, external Spotify URL, first album image if any, preview if any.
    pub fn from_track(track: TrackObject) -> Song {
        Song {
            artist: track
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            url: track.external_urls.spotify,
            image: track.album.images.first().map(|i| i.url.clone()),
            preview: track.preview_url,
            name: track.name,
        }
    }
}

// Spotify Web API wire types, narrowed to the fields this app reads.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: AlbumRef,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSearchResponse {
    pub playlists: PlaylistPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackSlot>,
}

/// One slot of a playlist. The playlist-tracks API returns removed or
/// unavailable entries with a null `track`, which deserializes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackSlot {
    #[serde(default)]
    pub track: Option<TrackObject>,
}
