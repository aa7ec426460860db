//! # Spotify Integration Module
//!
//! Client for the two slices of the Spotify platform this app touches: the
//! accounts service (OAuth 2.0 authorization-code flow) and the Web API
//! catalog endpoints (recommendations, playlist search, playlist tracks).
//!
//! All calls go through the [`SpotifyApi`] capability trait so the chat
//! orchestration can be exercised against a fake implementation without any
//! network access. [`SpotifyClient`] is the real implementation over a single
//! shared `reqwest` client with bounded timeouts, so a slow provider cannot
//! pin a request indefinitely.
//!
//! No retries are performed here. A failed call surfaces immediately as a
//! [`SpotifyError`] and the caller decides how to present it.

use std::{future::Future, time::Duration};

use reqwest::Client;

use crate::{
    config::Config,
    types::{PlaylistRef, PlaylistTrackSlot, Token, TrackObject},
};

pub mod auth;
pub mod recommendations;
pub mod search;

mod error;

pub use error::{SpotifyError, SpotifyResult};

/// Request timeout for all Spotify calls, in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection timeout for all Spotify calls, in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Capabilities the app needs from the Spotify platform.
///
/// One method per remote operation: code-for-token exchange, seeded
/// recommendations, playlist search, and playlist track listing. Playlist
/// slots are returned raw so callers can decide how to treat null tracks.
pub trait SpotifyApi: Send + Sync + 'static {
    fn exchange_code(&self, code: &str) -> impl Future<Output = SpotifyResult<Token>> + Send;

    fn recommendations(
        &self,
        token: &str,
        genre: &str,
        limit: u32,
    ) -> impl Future<Output = SpotifyResult<Vec<TrackObject>>> + Send;

    fn search_playlists(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = SpotifyResult<Vec<PlaylistRef>>> + Send;

    fn playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> impl Future<Output = SpotifyResult<Vec<PlaylistTrackSlot>>> + Send;
}

/// Real Spotify client over HTTP.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    /// Builds the client with bounded request and connect timeouts.
    pub fn new(config: Config) -> SpotifyResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(SpotifyClient { http, config })
    }
}

impl SpotifyApi for SpotifyClient {
    async fn exchange_code(&self, code: &str) -> SpotifyResult<Token> {
        auth::exchange_code(&self.http, &self.config, code).await
    }

    async fn recommendations(
        &self,
        token: &str,
        genre: &str,
        limit: u32,
    ) -> SpotifyResult<Vec<TrackObject>> {
        recommendations::get_recommendations(&self.http, &self.config, token, genre, limit).await
    }

    async fn search_playlists(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> SpotifyResult<Vec<PlaylistRef>> {
        search::search_playlists(&self.http, &self.config, token, query, limit).await
    }

    async fn playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> SpotifyResult<Vec<PlaylistTrackSlot>> {
        search::playlist_tracks(&self.http, &self.config, token, playlist_id, limit).await
    }
}
