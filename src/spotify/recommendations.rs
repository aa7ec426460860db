use reqwest::Client;

use crate::{
    config::Config,
    types::{RecommendationsResponse, TrackObject},
};

use super::SpotifyResult;

/// Minimum track popularity (0-100) requested from the recommendations
/// endpoint, biasing results toward well-known tracks.
const MIN_POPULARITY: u32 = 50;

/// Market used for recommendation availability filtering.
const MARKET: &str = "US";

/// Fetches seeded recommendations for a single genre.
///
/// Zero tracks is a legitimate outcome and comes back as an empty vec, not
/// an error; the caller uses it to decide whether to fall back to playlist
/// search.
pub async fn get_recommendations(
    http: &Client,
    config: &Config,
    token: &str,
    genre: &str,
    limit: u32,
) -> SpotifyResult<Vec<TrackObject>> {
    let api_url = format!(
        "{uri}/recommendations?seed_genres={genre}&limit={limit}&market={market}&min_popularity={min_popularity}",
        uri = &config.api_url,
        genre = genre,
        limit = limit,
        market = MARKET,
        min_popularity = MIN_POPULARITY,
    );

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<RecommendationsResponse>().await?;

    Ok(json.tracks)
}
