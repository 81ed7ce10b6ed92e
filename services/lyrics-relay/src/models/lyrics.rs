// lyrics models
use serde::Serialize;
use serde_json::Value;

use crate::error::RelayError;

/// Track metadata taken from the inbound query string.
///
/// Only constructed through [`LookupRequest::from_query`], so `artist` and
/// `song` are always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub track_id: Option<String>,
    pub artist: String,
    pub song: String,
    pub album: Option<String>,
}

impl LookupRequest {
    /// Decodes `trackId`, `artist`, `song` and `album` from a raw query string.
    /// Repeated keys keep their first value.
    pub fn from_query(query: Option<&str>) -> Result<Self, RelayError> {
        let mut track_id = None;
        let mut artist = None;
        let mut song = None;
        let mut album = None;

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                "trackId" => &mut track_id,
                "artist" => &mut artist,
                "song" => &mut song,
                "album" => &mut album,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        match (non_empty(artist), non_empty(song)) {
            (Some(artist), Some(song)) => Ok(LookupRequest {
                track_id,
                artist,
                song,
                album: non_empty(album),
            }),
            _ => Err(RelayError::MissingParameters),
        }
    }
}

/// The two lyric fields the relay passes through from the provider.
/// Serialising always writes both keys.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResult {
    pub synced_lyrics: Option<String>,
    pub plain_lyrics: Option<String>,
}

impl LyricsResult {
    /// Picks the lyric fields out of any provider JSON document. Fields that are
    /// missing or not strings, and bodies that are not objects, yield `None`.
    pub fn from_provider(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        LyricsResult {
            synced_lyrics: text("syncedLyrics"),
            plain_lyrics: text("plainLyrics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_all_fields() {
        let request =
            LookupRequest::from_query(Some("trackId=42&artist=Adele&song=Hello&album=25")).unwrap();
        assert_eq!(
            request,
            LookupRequest {
                track_id: Some("42".to_string()),
                artist: "Adele".to_string(),
                song: "Hello".to_string(),
                album: Some("25".to_string()),
            }
        );
    }

    #[test]
    fn decodes_percent_and_plus_escapes() {
        let request = LookupRequest::from_query(Some("artist=A+B&song=C%26D")).unwrap();
        assert_eq!(request.artist, "A B");
        assert_eq!(request.song, "C&D");
        assert_eq!(request.album, None);
        assert_eq!(request.track_id, None);
    }

    #[test]
    fn first_occurrence_wins() {
        let request = LookupRequest::from_query(Some("artist=First&artist=Second&song=x")).unwrap();
        assert_eq!(request.artist, "First");
    }

    #[test]
    fn empty_album_is_absent() {
        let request = LookupRequest::from_query(Some("artist=a&song=b&album=")).unwrap();
        assert_eq!(request.album, None);
    }

    #[test]
    fn missing_or_empty_required_fields_are_rejected() {
        for query in [
            None,
            Some(""),
            Some("artist=Adele"),
            Some("song=Hello"),
            Some("artist=&song=Hello"),
            Some("artist=Adele&song="),
            Some("album=25&trackId=1"),
        ] {
            assert!(
                matches!(
                    LookupRequest::from_query(query),
                    Err(RelayError::MissingParameters)
                ),
                "query {query:?} should be rejected"
            );
        }
    }

    #[test]
    fn provider_payload_drops_extra_fields() {
        let result = LyricsResult::from_provider(&json!({
            "id": 123,
            "trackName": "Hi",
            "syncedLyrics": "[00:01.00]Hi",
            "plainLyrics": "Hi",
            "instrumental": false
        }));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "syncedLyrics": "[00:01.00]Hi", "plainLyrics": "Hi" })
        );
    }

    #[test]
    fn missing_null_and_non_string_fields_become_null() {
        let result = LyricsResult::from_provider(&json!({ "syncedLyrics": null, "id": 1 }));
        assert_eq!(result, LyricsResult::default());

        let result = LyricsResult::from_provider(&json!({ "syncedLyrics": 7, "plainLyrics": ["a"] }));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "syncedLyrics": null, "plainLyrics": null })
        );
    }

    #[test]
    fn arrays_and_scalars_carry_no_lyrics() {
        for body in [
            json!(["[00:01.00]x", "y"]),
            json!([]),
            json!("lyrics"),
            json!(42),
            json!(true),
            Value::Null,
        ] {
            assert_eq!(LyricsResult::from_provider(&body), LyricsResult::default(), "{body}");
        }
    }
}
