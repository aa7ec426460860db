use std::sync::Arc;

use axum::{Extension, http::HeaderMap, response::Html};

use crate::{
    server::AppState,
    session::{self, SessionStore},
    spotify::SpotifyApi,
};

/// Serves the chat page, or its logged-out variant when no valid session
/// token exists.
pub async fn home<S: SpotifyApi>(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState<S>>>,
) -> Html<&'static str> {
    let logged_in = match session::from_headers(&state.config.session_secret, &headers) {
        Some(session_id) => state
            .sessions
            .get(&session_id)
            .await
            .is_some_and(|token| !token.is_expired()),
        None => false,
    };

    if logged_in {
        Html(CHAT_PAGE)
    } else {
        Html(LOGIN_PAGE)
    }
}

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Moodmix</title></head>
<body>
  <h2>Moodmix</h2>
  <p>Tell me your mood and I'll find you some songs.</p>
  <a href="/login">Log in with Spotify</a>
</body>
</html>"#;

const CHAT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Moodmix</title></head>
<body>
  <h2>Moodmix</h2>
  <form id="chat">
    <input id="mood" placeholder="How do you feel?" autocomplete="off">
    <button>Send</button>
  </form>
  <p id="reply"></p>
  <ul id="songs"></ul>
  <script>
    document.getElementById('chat').addEventListener('submit', async (event) => {
      event.preventDefault();
      const mood = document.getElementById('mood').value;
      const res = await fetch('/chat', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ mood }),
      });
      const data = await res.json();
      document.getElementById('reply').textContent = data.reply;
      const list = document.getElementById('songs');
      list.innerHTML = '';
      for (const song of data.songs) {
        const item = document.createElement('li');
        const link = document.createElement('a');
        link.href = song.url;
        link.textContent = song.name + ' by ' + song.artist;
        item.appendChild(link);
        list.appendChild(item);
      }
    });
  </script>
</body>
</html>"#;
