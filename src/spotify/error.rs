//! Spotify client error types.

use thiserror::Error;

/// Errors from the Spotify accounts service or Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The authorization-code-for-token exchange was rejected.
    #[error("token exchange failed: {0}")]
    Exchange(String),

    /// HTTP transport or status failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a payload we could not make sense of.
    #[error("unexpected Spotify response: {0}")]
    Malformed(String),
}

/// Result type for Spotify operations.
pub type SpotifyResult<T> = Result<T, SpotifyError>;
