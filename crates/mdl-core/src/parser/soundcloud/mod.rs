//! SoundCloud URL classification: tracks and playlists, public and private.
//!
//! Paths are split into segments and dispatched on their shape, most
//! constrained shape first:
//!
//! 1. `/<artist>/sets/<playlist>/s-<token>` private playlist
//! 2. `/<artist>/sets/<playlist>` public playlist
//! 3. `/<artist>/<track>/s-<token>` private track
//! 4. `/<artist>/<track>` public track
//!
//! The order is the tie-break for overlapping shapes (`/a/sets/s-x` is a
//! public playlist named `s-x`, never a private track named `sets`).

use super::error::InvalidMusicUrlError;
use super::normalize::{authority_and_path, host_matches_domain, host_of, normalize_url, sanitize_url};
use super::types::{ContentType, MusicProvider, ParsedMusicUrl, UrlMetadata};
use super::MusicUrlParser;

/// Domain marker a host must equal or be a subdomain of.
const DOMAIN: &str = "soundcloud.com";
/// Hosts whose paths follow the artist/track/sets layout.
const STRUCTURAL_HOSTS: &[&str] = &["soundcloud.com", "www.soundcloud.com"];
const MOBILE_HOST: &str = "m.soundcloud.com";
const SETS_MARKER: &str = "sets";
const SECRET_TOKEN_PREFIX: &str = "s-";

/// Path shape recognised by the segment dispatcher. Slugs may still be empty.
#[derive(Debug, PartialEq, Eq)]
enum Shape<'a> {
    Playlist {
        artist: &'a str,
        playlist: &'a str,
        token: Option<&'a str>,
    },
    Track {
        artist: &'a str,
        track: &'a str,
        token: Option<&'a str>,
    },
}

fn is_sets(segment: &str) -> bool {
    segment.eq_ignore_ascii_case(SETS_MARKER)
}

/// `s-` (either case) followed by at least one ASCII alphanumeric, nothing else.
fn is_secret_token(segment: &str) -> bool {
    let prefix_len = SECRET_TOKEN_PREFIX.len();
    segment
        .get(..prefix_len)
        .map_or(false, |head| head.eq_ignore_ascii_case(SECRET_TOKEN_PREFIX))
        && segment.len() > prefix_len
        && segment.bytes().skip(prefix_len).all(|b| b.is_ascii_alphanumeric())
}

fn classify<'a>(segments: &[&'a str]) -> Option<Shape<'a>> {
    match *segments {
        [artist, sets, playlist, token] if is_sets(sets) && is_secret_token(token) => {
            Some(Shape::Playlist {
                artist,
                playlist,
                token: Some(token),
            })
        }
        [artist, sets, playlist] if is_sets(sets) => Some(Shape::Playlist {
            artist,
            playlist,
            token: None,
        }),
        [artist, track, token] if is_secret_token(token) => Some(Shape::Track {
            artist,
            track,
            token: Some(token),
        }),
        [artist, track] => Some(Shape::Track {
            artist,
            track,
            token: None,
        }),
        _ => None,
    }
}

/// Parser for `soundcloud.com` links.
#[derive(Debug, Clone, Default)]
pub struct SoundCloudParser {
    accept_mobile_links: bool,
}

impl SoundCloudParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also classify `m.soundcloud.com` share links. The sanitized URL keeps the mobile host.
    pub fn with_mobile_links(mut self, accept: bool) -> Self {
        self.accept_mobile_links = accept;
        self
    }

    fn is_structural_host(&self, host: &str) -> bool {
        STRUCTURAL_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h))
            || (self.accept_mobile_links && host.eq_ignore_ascii_case(MOBILE_HOST))
    }

    /// Host/path split and shape dispatch. `None` means no structural pattern matched.
    fn match_shape<'a>(&self, normalized: &'a str) -> Option<Shape<'a>> {
        let rest = authority_and_path(normalized).trim_end();
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        if !self.is_structural_host(host) {
            return None;
        }
        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };
        classify(&segments)
    }
}

impl MusicUrlParser for SoundCloudParser {
    fn provider(&self) -> MusicProvider {
        MusicProvider::SoundCloud
    }

    fn can_parse(&self, url: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        host_of(url).map_or(false, |host| host_matches_domain(&host, DOMAIN))
    }

    fn parse(&self, url: &str) -> Result<ParsedMusicUrl, InvalidMusicUrlError> {
        if !self.can_parse(url) {
            return Err(InvalidMusicUrlError::new(url, "Not a SoundCloud URL"));
        }

        let normalized = normalize_url(url);
        let shape = self
            .match_shape(&normalized)
            .ok_or_else(|| InvalidMusicUrlError::new(url, "Invalid SoundCloud URL format"))?;

        let (content_type, metadata) = match shape {
            Shape::Playlist {
                artist,
                playlist,
                token,
            } => {
                if artist.is_empty() || playlist.is_empty() {
                    return Err(InvalidMusicUrlError::new(
                        url,
                        "Missing artist or playlist slug",
                    ));
                }
                let metadata = UrlMetadata {
                    artist_slug: Some(artist.to_string()),
                    playlist_slug: Some(playlist.to_string()),
                    secret_token: token.map(str::to_string),
                    ..UrlMetadata::default()
                };
                (ContentType::Playlist, metadata)
            }
            Shape::Track {
                artist,
                track,
                token,
            } => {
                if artist.is_empty() || track.is_empty() {
                    return Err(InvalidMusicUrlError::new(url, "Missing artist or track slug"));
                }
                if token.is_none() && (normalized.contains("?in=") || normalized.contains("&in=")) {
                    tracing::debug!(url, "discarding playlist context from track link");
                }
                let metadata = UrlMetadata {
                    artist_slug: Some(artist.to_string()),
                    track_slug: Some(track.to_string()),
                    secret_token: token.map(str::to_string),
                    ..UrlMetadata::default()
                };
                (ContentType::Track, metadata)
            }
        };

        let parsed = ParsedMusicUrl {
            provider: self.provider(),
            content_type,
            is_private: metadata.secret_token.is_some(),
            sanitized_url: self.sanitize(url),
            metadata,
            original_url: url.to_string(),
        };
        tracing::debug!(
            content_type = %parsed.content_type,
            is_private = parsed.is_private,
            url = %parsed.redacted_url(),
            "classified soundcloud url"
        );
        Ok(parsed)
    }

    fn sanitize(&self, url: &str) -> String {
        sanitize_url(url)
    }
}
