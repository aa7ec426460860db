//! Shared test infrastructure: a fake Spotify client, fixtures, and request
//! helpers for driving the router without any network access.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, Response},
};
use tower::ServiceExt;

use moodmix::{
    config::Config,
    server::{self, AppState},
    session::{self, SessionStore},
    spotify::{SpotifyApi, SpotifyError, SpotifyResult},
    types::{
        AlbumRef, ExternalUrls, ImageObject, PlaylistRef, PlaylistTrackSlot, Token, TrackArtist,
        TrackObject,
    },
};

/// Canned Spotify client. Responses are fixed per instance; every call is
/// recorded so tests can assert what was (and was not) invoked.
#[derive(Clone, Default)]
pub struct FakeSpotify {
    pub recommendations: Vec<TrackObject>,
    pub fail_recommendations: bool,
    pub playlists: Vec<PlaylistRef>,
    pub playlist_slots: Vec<PlaylistTrackSlot>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeSpotify {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SpotifyApi for FakeSpotify {
    async fn exchange_code(&self, code: &str) -> SpotifyResult<Token> {
        self.record(format!("exchange_code:{}", code));
        if code == "bad-code" {
            return Err(SpotifyError::Exchange(
                "token endpoint returned 400 Bad Request".to_string(),
            ));
        }
        Ok(test_token())
    }

    async fn recommendations(
        &self,
        _token: &str,
        genre: &str,
        _limit: u32,
    ) -> SpotifyResult<Vec<TrackObject>> {
        self.record(format!("recommendations:{}", genre));
        if self.fail_recommendations {
            return Err(SpotifyError::Malformed("simulated outage".to_string()));
        }
        Ok(self.recommendations.clone())
    }

    async fn search_playlists(
        &self,
        _token: &str,
        query: &str,
        _limit: u32,
    ) -> SpotifyResult<Vec<PlaylistRef>> {
        self.record(format!("search_playlists:{}", query));
        Ok(self.playlists.clone())
    }

    async fn playlist_tracks(
        &self,
        _token: &str,
        playlist_id: &str,
        _limit: u32,
    ) -> SpotifyResult<Vec<PlaylistTrackSlot>> {
        self.record(format!("playlist_tracks:{}", playlist_id));
        Ok(self.playlist_slots.clone())
    }
}

pub fn test_config() -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:3000/callback".to_string(),
        scope: "user-read-private,user-top-read".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
        session_secret: "test-secret".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
    }
}

pub fn test_token() -> Token {
    Token {
        access_token: "test-access-token".to_string(),
        refresh_token: "test-refresh-token".to_string(),
        scope: "user-read-private".to_string(),
        expires_in: 3600,
        obtained_at: chrono::Utc::now().timestamp() as u64,
    }
}

/// A token whose lifetime has already run out.
pub fn expired_token() -> Token {
    Token {
        expires_in: 60,
        obtained_at: 0,
        ..test_token()
    }
}

/// A full track object with every optional field populated.
pub fn track(name: &str, artist: &str) -> TrackObject {
    TrackObject {
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
        album: AlbumRef {
            images: vec![ImageObject {
                url: format!("https://i.scdn.co/image/{}", name),
            }],
        },
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/track/{}", name),
        },
        preview_url: Some(format!("https://p.scdn.co/mp3-preview/{}", name)),
    }
}

pub fn app_state(fake: FakeSpotify) -> Arc<AppState<FakeSpotify>> {
    Arc::new(AppState::new(test_config(), fake))
}

/// Seeds a logged-in session into the state and returns the matching
/// `Cookie` header value.
pub async fn log_in(state: &AppState<FakeSpotify>) -> String {
    log_in_with(state, test_token()).await
}

pub async fn log_in_with(state: &AppState<FakeSpotify>, token: Token) -> String {
    let session_id = session::generate_session_id();
    state.sessions.set(&session_id, token).await;
    format!(
        "{}={}",
        session::SESSION_COOKIE,
        session::cookie_value(&state.config.session_secret, &session_id)
    )
}

pub async fn send(
    state: Arc<AppState<FakeSpotify>>,
    request: Request<Body>,
) -> Response<Body> {
    server::router(state).oneshot(request).await.unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
