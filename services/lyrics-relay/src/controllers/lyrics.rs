// LRCLIB lookup controller
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::CONFIG_MANAGER;
use crate::error::RelayError;
use crate::models::lyrics::{LookupRequest, LyricsResult};

/// Provider path appended to the configured base URL.
const LRCLIB_GET_PATH: &str = "/api/get";

pub struct LyricsController {
    client: Client,
    base_url: String,
}

impl Default for LyricsController {
    fn default() -> Self {
        Self::new()
    }
}

impl LyricsController {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG_MANAGER.get("LRCLIB_URL"))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the provider URL for a lookup. `album` is only sent when present.
    pub fn lookup_url(&self, request: &LookupRequest) -> String {
        let mut url = format!(
            "{}{}?artist_name={}&track_name={}",
            self.base_url,
            LRCLIB_GET_PATH,
            urlencoding::encode(&request.artist),
            urlencoding::encode(&request.song),
        );
        if let Some(album) = &request.album {
            url.push_str("&album_name=");
            url.push_str(&urlencoding::encode(album));
        }
        url
    }

    /// Single GET against the provider, reshaped to the two lyric fields.
    pub async fn get_lyrics(&self, request: &LookupRequest) -> Result<LyricsResult, RelayError> {
        debug!(
            "Lyrics lookup: artist={:?} song={:?} album={:?} track_id={:?}",
            request.artist, request.song, request.album, request.track_id
        );

        let response = self.client.get(self.lookup_url(request)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "LRCLIB returned {} for {} - {}",
                status, request.artist, request.song
            );
            return Err(RelayError::NotFound);
        }

        let body = response.bytes().await?;
        let document: serde_json::Value = serde_json::from_slice(&body)?;
        let lyrics = LyricsResult::from_provider(&document);

        info!(
            "Lyrics found for {} - {} (synced: {}, plain: {})",
            request.artist,
            request.song,
            lyrics.synced_lyrics.is_some(),
            lyrics.plain_lyrics.is_some()
        );
        Ok(lyrics)
    }
}
