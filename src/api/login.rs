use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{server::AppState, spotify::{self, SpotifyApi}};

/// Sends the user into the Spotify OAuth flow with a plain 302.
pub async fn login<S: SpotifyApi>(
    Extension(state): Extension<Arc<AppState<S>>>,
) -> impl IntoResponse {
    let authorize_url = spotify::auth::authorize_url(&state.config);
    (StatusCode::FOUND, [(header::LOCATION, authorize_url)])
}
