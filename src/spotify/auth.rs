//! OAuth 2.0 authorization-code flow against the Spotify accounts service.
//!
//! This is the plain confidential-client variant of the flow: the authorize
//! URL carries the client id, redirect URI, and scope, and the code exchange
//! authenticates with HTTP Basic over the client id and secret. Token
//! refresh is deliberately not implemented; an expired token simply stops
//! producing results until the user logs in again.

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, types::Token};

use super::{SpotifyError, SpotifyResult};

/// Constructs the Spotify authorize endpoint URL for the login redirect.
///
/// Pure string construction, no side effects. The scope is comma separated
/// so the query stays free of characters that need escaping.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        redirect_uri = config.redirect_uri,
        scope = config.scope,
    )
}

/// Exchanges an authorization code for a token bundle.
///
/// Fails with [`SpotifyError::Exchange`] when the accounts service rejects
/// the code (invalid, expired, or already used) and with
/// [`SpotifyError::Http`] when it is unreachable.
pub async fn exchange_code(http: &Client, config: &Config, code: &str) -> SpotifyResult<Token> {
    let res = http
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(SpotifyError::Exchange(format!(
            "token endpoint returned {}",
            res.status()
        )));
    }

    let json: Value = res.json().await?;
    let Some(access_token) = json["access_token"].as_str() else {
        return Err(SpotifyError::Malformed(
            "token response has no access_token".to_string(),
        ));
    };

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
