//! Session cookie handling and the per-session token store.
//!
//! A session is a random alphanumeric id carried in a signed cookie. The
//! cookie value is `<id>.<sig>` where the signature is the URL-safe base64
//! of `sha256(secret || id)`. Cookies with a missing or wrong signature are
//! treated as no session at all. Tokens live in an in-memory map keyed by
//! session id, so concurrent requests from different sessions never contend
//! on each other's entries; within one session last write wins. Expired
//! tokens are evicted whenever a new one is stored, so the map stays
//! bounded by the number of live sessions.

use std::{collections::HashMap, future::Future, sync::Arc};

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::types::Token;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "moodmix_session";

/// Storage for session-scoped OAuth tokens.
///
/// Kept behind a trait so the auth flow is not tied to any particular
/// backing store. `set` overwrites any previous token for the session.
pub trait SessionStore: Send + Sync + 'static {
    fn get(&self, session_id: &str) -> impl Future<Output = Option<Token>> + Send;
    fn set(&self, session_id: &str, token: Token) -> impl Future<Output = ()> + Send;
}

/// In-memory session store. Sessions vanish on restart.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    tokens: Arc<Mutex<HashMap<String, Token>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> Option<Token> {
        self.tokens.lock().await.get(session_id).cloned()
    }

    async fn set(&self, session_id: &str, token: Token) {
        let mut tokens = self.tokens.lock().await;
        // Each login is a chance to shed dead sessions, keeping the map
        // bounded by live ones.
        tokens.retain(|_, token| !token.is_expired());
        tokens.insert(session_id.to_string(), token);
    }
}

/// Generates a fresh random session id.
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Computes the signature for a session id.
pub fn sign_session_id(secret: &str, session_id: &str) -> String {
    let hash = Sha256::digest(format!("{}{}", secret, session_id).as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the signed cookie value for a session id.
pub fn cookie_value(secret: &str, session_id: &str) -> String {
    format!("{}.{}", session_id, sign_session_id(secret, session_id))
}

/// Returns the session id if the cookie value carries a valid signature.
pub fn verify_cookie_value(secret: &str, value: &str) -> Option<String> {
    let (session_id, sig) = value.split_once('.')?;
    if sign_session_id(secret, session_id) == sig {
        Some(session_id.to_string())
    } else {
        None
    }
}

/// Extracts a verified session id from a request's `Cookie` header.
pub fn from_headers(secret: &str, headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            verify_cookie_value(secret, value)
        } else {
            None
        }
    })
}
