use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api, config::Config, error, info, session::MemorySessionStore, spotify::SpotifyApi,
};

/// Shared application state: the immutable configuration, the Spotify
/// client, and the per-session token store.
pub struct AppState<S: SpotifyApi> {
    pub config: Config,
    pub spotify: S,
    pub sessions: MemorySessionStore,
}

impl<S: SpotifyApi> AppState<S> {
    pub fn new(config: Config, spotify: S) -> Self {
        AppState {
            config,
            spotify,
            sessions: MemorySessionStore::new(),
        }
    }
}

/// Builds the router. Generic over the Spotify client so tests can wire in
/// a fake implementation.
pub fn router<S: SpotifyApi>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(api::home::<S>))
        .route("/login", get(api::login::<S>))
        .route("/callback", get(api::callback::<S>))
        .route("/chat", post(api::chat::<S>))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

/// Binds the listener and serves requests until the process is stopped.
pub async fn start_server<S: SpotifyApi>(state: Arc<AppState<S>>) {
    let app = router(Arc::clone(&state));

    let addr = match SocketAddr::from_str(&state.config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
