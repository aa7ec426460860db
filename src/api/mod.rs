//! # API Module
//!
//! HTTP handlers for the Moodmix endpoints:
//!
//! - [`home`] - `GET /`, chat page with a logged-in or logged-out variant
//! - [`login`] - `GET /login`, 302 redirect into the Spotify OAuth flow
//! - [`callback`] - `GET /callback`, code-for-token exchange and session setup
//! - [`chat`] - `POST /chat`, mood to song recommendations
//! - [`health`] - `GET /health`, liveness probe
//!
//! Handlers are plain async functions wired into the router in
//! [`crate::server`]. The chat endpoint never surfaces a provider failure as
//! a server error; logical failures are spoken through the reply text with
//! an empty song list and a 200 status.

mod callback;
mod chat;
mod health;
mod home;
mod login;

pub use callback::callback;
pub use chat::chat;
pub use health::health;
pub use home::home;
pub use login::login;
