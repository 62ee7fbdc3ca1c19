//! Value types produced by URL classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Music platform a URL belongs to. Fixed by whichever parser matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MusicProvider {
    #[serde(rename = "soundcloud")]
    SoundCloud,
    Spotify,
    #[serde(rename = "youtube")]
    YouTube,
    AppleMusic,
}

impl MusicProvider {
    /// Stable provider key (e.g. "soundcloud", "apple-music").
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicProvider::SoundCloud => "soundcloud",
            MusicProvider::Spotify => "spotify",
            MusicProvider::YouTube => "youtube",
            MusicProvider::AppleMusic => "apple-music",
        }
    }
}

impl fmt::Display for MusicProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MusicProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soundcloud" => Ok(MusicProvider::SoundCloud),
            "spotify" => Ok(MusicProvider::Spotify),
            "youtube" => Ok(MusicProvider::YouTube),
            "apple-music" => Ok(MusicProvider::AppleMusic),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Kind of content a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Track,
    Playlist,
    Album,
    Artist,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Track => "track",
            ContentType::Playlist => "playlist",
            ContentType::Album => "album",
            ContentType::Artist => "artist",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(ContentType::Track),
            "playlist" => Ok(ContentType::Playlist),
            "album" => Ok(ContentType::Album),
            "artist" => Ok(ContentType::Artist),
            other => Err(format!("unknown content type: {other}")),
        }
    }
}

/// Provider-specific identifiers pulled out of the URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_slug: Option<String>,
    /// Access token for private/unlisted content (`s-...`). Present iff private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

/// Result of a successful parse. Created fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMusicUrl {
    pub provider: MusicProvider,
    pub content_type: ContentType,
    pub is_private: bool,
    /// `https://` URL with the query string removed.
    pub sanitized_url: String,
    pub metadata: UrlMetadata,
    /// Input exactly as received.
    pub original_url: String,
}

impl ParsedMusicUrl {
    /// Sanitized URL with the secret token masked, safe to write to logs.
    pub fn redacted_url(&self) -> String {
        match &self.metadata.secret_token {
            Some(token) => match self.sanitized_url.strip_suffix(token.as_str()) {
                Some(head) => format!("{head}s-***"),
                None => self.sanitized_url.replace(token.as_str(), "s-***"),
            },
            None => self.sanitized_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_keys_roundtrip() {
        for p in [
            MusicProvider::SoundCloud,
            MusicProvider::Spotify,
            MusicProvider::YouTube,
            MusicProvider::AppleMusic,
        ] {
            assert_eq!(p.as_str().parse::<MusicProvider>().unwrap(), p);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }

    #[test]
    fn provider_from_str_rejects_unknown() {
        assert!("deezer".parse::<MusicProvider>().is_err());
        assert_eq!(
            " SoundCloud ".parse::<MusicProvider>().unwrap(),
            MusicProvider::SoundCloud
        );
    }

    #[test]
    fn parsed_url_serializes_camel_case_and_skips_absent_slugs() {
        let parsed = ParsedMusicUrl {
            provider: MusicProvider::SoundCloud,
            content_type: ContentType::Track,
            is_private: false,
            sanitized_url: "https://soundcloud.com/a/b".to_string(),
            metadata: UrlMetadata {
                artist_slug: Some("a".to_string()),
                track_slug: Some("b".to_string()),
                ..UrlMetadata::default()
            },
            original_url: "soundcloud.com/a/b?si=1".to_string(),
        };
        let v = serde_json::to_value(&parsed).unwrap();
        assert_eq!(v["contentType"], "track");
        assert_eq!(v["isPrivate"], false);
        assert_eq!(v["sanitizedUrl"], "https://soundcloud.com/a/b");
        assert_eq!(v["metadata"]["artistSlug"], "a");
        assert!(v["metadata"].get("secretToken").is_none());
        assert!(v["metadata"].get("playlistSlug").is_none());
    }

    #[test]
    fn redacted_url_masks_secret_token() {
        let mut parsed = ParsedMusicUrl {
            provider: MusicProvider::SoundCloud,
            content_type: ContentType::Playlist,
            is_private: true,
            sanitized_url: "https://soundcloud.com/art/sets/pl/s-Zny9PbEIV56".to_string(),
            metadata: UrlMetadata {
                artist_slug: Some("art".to_string()),
                playlist_slug: Some("pl".to_string()),
                secret_token: Some("s-Zny9PbEIV56".to_string()),
                ..UrlMetadata::default()
            },
            original_url: "https://soundcloud.com/art/sets/pl/s-Zny9PbEIV56?si=1".to_string(),
        };
        assert_eq!(parsed.redacted_url(), "https://soundcloud.com/art/sets/pl/s-***");
        assert!(!parsed.redacted_url().contains("Zny9PbEIV56"));

        parsed.is_private = false;
        parsed.metadata.secret_token = None;
        parsed.sanitized_url = "https://soundcloud.com/art/sets/pl".to_string();
        assert_eq!(parsed.redacted_url(), "https://soundcloud.com/art/sets/pl");
    }
}
