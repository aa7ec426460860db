use std::sync::Arc;

use axum::{Extension, Json, http::HeaderMap};

use crate::{
    mood,
    server::AppState,
    session::{self, SessionStore},
    spotify::{SpotifyApi, SpotifyResult},
    types::{ChatRequest, ChatResponse, Song, TrackObject},
    warning,
};

/// Songs returned per chat reply, for both the primary recommendations call
/// and the playlist fallback.
const SONG_LIMIT: u32 = 5;

/// Answers a chat message with song recommendations.
///
/// Flow: session token lookup, mood to genre resolution, seeded
/// recommendations, playlist-search fallback when the primary call comes
/// back empty. Every outcome is a 200; auth gaps, provider failures, and
/// empty results all speak through the reply text.
pub async fn chat<S: SpotifyApi>(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState<S>>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    // Lower-cased but not trimmed: the reply echoes the mood as received,
    // while genre resolution does its own normalization.
    let mood = request.mood.unwrap_or_default().to_lowercase();

    let token = match session::from_headers(&state.config.session_secret, &headers) {
        Some(session_id) => state.sessions.get(&session_id).await,
        None => None,
    };
    let Some(token) = token.filter(|token| !token.is_expired()) else {
        return reply("Please log in first!");
    };

    let genre = mood::resolve_genre(&mood);

    let tracks = match state
        .spotify
        .recommendations(&token.access_token, genre, SONG_LIMIT)
        .await
    {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Spotify API error: {}", e);
            return reply("Error fetching songs from Spotify.");
        }
    };

    let tracks = if tracks.is_empty() {
        match fallback_search(&state, &token.access_token, &mood).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Spotify API error: {}", e);
                return reply("Error fetching songs from Spotify.");
            }
        }
    } else {
        tracks
    };

    if tracks.is_empty() {
        return reply("Sorry, I couldn’t find songs for that mood.");
    }

    let songs = tracks.into_iter().map(Song::from_track).collect();

    Json(ChatResponse {
        reply: format!("Here are some {} mood songs 🎵", mood),
        songs,
    })
}

/// Second-chance lookup when recommendations come back empty: search for a
/// "<mood> hits" playlist and take its first few tracks.
async fn fallback_search<S: SpotifyApi>(
    state: &AppState<S>,
    access_token: &str,
    mood: &str,
) -> SpotifyResult<Vec<TrackObject>> {
    let query = format!("{} hits", mood);

    let playlists = state.spotify.search_playlists(access_token, &query, 1).await?;
    let Some(playlist) = playlists.first() else {
        return Ok(Vec::new());
    };

    let slots = state
        .spotify
        .playlist_tracks(access_token, &playlist.id, SONG_LIMIT)
        .await?;

    // Removed tracks come back as null slots; drop them.
    Ok(slots.into_iter().filter_map(|slot| slot.track).collect())
}

fn reply(text: &str) -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: text.to_string(),
        songs: Vec::new(),
    })
}
