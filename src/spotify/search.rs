use reqwest::Client;

use crate::{
    config::Config,
    types::{PlaylistRef, PlaylistSearchResponse, PlaylistTrackSlot, PlaylistTracksResponse},
};

use super::SpotifyResult;

/// Searches the playlist index for a free-text query.
///
/// The query goes through `reqwest`'s query encoding since moods are
/// arbitrary user text.
pub async fn search_playlists(
    http: &Client,
    config: &Config,
    token: &str,
    query: &str,
    limit: u32,
) -> SpotifyResult<Vec<PlaylistRef>> {
    let api_url = format!("{uri}/search", uri = &config.api_url);
    let limit = limit.to_string();

    let response = http
        .get(&api_url)
        .query(&[
            ("q", query),
            ("type", "playlist"),
            ("limit", limit.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<PlaylistSearchResponse>().await?;

    Ok(json.playlists.items)
}

/// Lists up to `limit` track slots of a playlist.
///
/// Slots are returned as-is; removed or unavailable entries carry a null
/// track and it is the caller's job to drop them.
pub async fn playlist_tracks(
    http: &Client,
    config: &Config,
    token: &str,
    playlist_id: &str,
    limit: u32,
) -> SpotifyResult<Vec<PlaylistTrackSlot>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config.api_url,
        id = playlist_id,
        limit = limit,
    );

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<PlaylistTracksResponse>().await?;

    Ok(json.items)
}
