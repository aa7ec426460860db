//! Configuration for the Moodmix server.
//!
//! All configuration comes from environment variables, optionally seeded from
//! a `.env` file in the working directory. Credentials are read exactly once
//! at startup into an immutable [`Config`] value that is passed to the
//! Spotify client and the request handlers; nothing reads the environment
//! after that. Missing required credentials surface as a startup error
//! instead of failing on the first request.

use std::env;

use rand::{Rng, distr::Alphanumeric};

/// Default OAuth scope: read-only access sufficient for recommendation and
/// search calls. Comma separated, as the Spotify accounts service accepts.
const DEFAULT_SCOPE: &str = "user-read-private,user-top-read,playlist-read-private,user-read-email";

/// Immutable runtime configuration, loaded once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// OAuth scope requested during login.
    pub scope: String,
    /// Spotify accounts authorize endpoint.
    pub auth_url: String,
    /// Spotify accounts token endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Secret used to sign session cookies.
    pub session_secret: String,
    /// Address and port the HTTP server binds to.
    pub server_addr: String,
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// Returns an error naming the first missing required variable. Optional
    /// variables fall back to the standard Spotify endpoints and sensible
    /// local defaults. Without a `SESSION_SECRET` a random per-process secret
    /// is generated, which means sessions do not survive a restart.
    pub fn from_env() -> Result<Config, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: optional("SPOTIFY_REDIRECT_URI", "http://127.0.0.1:3000/callback"),
            scope: optional("SPOTIFY_SCOPE", DEFAULT_SCOPE),
            auth_url: optional("SPOTIFY_AUTH_URL", "https://accounts.spotify.com/authorize"),
            token_url: optional("SPOTIFY_TOKEN_URL", "https://accounts.spotify.com/api/token"),
            api_url: optional("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| random_secret()),
            server_addr: optional("SERVER_ADDRESS", "0.0.0.0:3000"),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn random_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
