//! Mood keyword to Spotify genre seed resolution.

/// Genre seed used when a mood has no dedicated mapping.
pub const DEFAULT_GENRE: &str = "pop";

/// Resolves a free-text mood to a Spotify genre seed.
///
/// Input is trimmed and case-folded before lookup, so `"Happy"` and
/// `" happy "` resolve identically. Empty, unknown, and unmapped moods all
/// fall back to [`DEFAULT_GENRE`]. Never fails.
pub fn resolve_genre(mood: &str) -> &'static str {
    match mood.trim().to_lowercase().as_str() {
        "happy" => "pop",
        "sad" => "acoustic",
        "angry" => "metal",
        "romantic" => "rnb",
        "relaxed" => "chill",
        "energetic" => "dance",
        _ => DEFAULT_GENRE,
    }
}
