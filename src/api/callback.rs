use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{
    server::AppState,
    session::{self, SessionStore},
    spotify::SpotifyApi,
    success, warning,
};

/// Completes the OAuth flow: exchanges the authorization code for a token,
/// stores it in the session, and redirects back to the chat page with the
/// signed session cookie set.
pub async fn callback<S: SpotifyApi>(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState<S>>>,
) -> Response {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    match state.spotify.exchange_code(code).await {
        Ok(token) => {
            // Reuse the caller's session when the cookie verifies, mint a
            // fresh id otherwise.
            let session_id = session::from_headers(&state.config.session_secret, &headers)
                .unwrap_or_else(session::generate_session_id);
            state.sessions.set(&session_id, token).await;
            success!("Spotify login completed");

            let cookie = format!(
                "{}={}; Path=/; HttpOnly",
                session::SESSION_COOKIE,
                session::cookie_value(&state.config.session_secret, &session_id)
            );

            (
                StatusCode::FOUND,
                [
                    (header::SET_COOKIE, cookie),
                    (header::LOCATION, "/".to_string()),
                ],
            )
                .into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>").into_response()
        }
    }
}
