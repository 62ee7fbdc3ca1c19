//! Resolve requests: turn raw user input into the summary the metadata fetcher needs.
//!
//! The HTTP/CLI layers only depend on this module and the registry; they never
//! talk to a provider parser directly.

use crate::parser::{
    ContentType, InvalidMusicUrlError, MusicProvider, ParsedMusicUrl, ParserRegistry,
};
use serde::{Deserialize, Serialize};

/// Incoming resolve request, as posted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub url: String,
    /// Force a specific provider instead of dispatching on the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<MusicProvider>,
    /// Reject the URL unless it classifies as this content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_type: Option<ContentType>,
}

impl ResolveRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            provider: None,
            preferred_type: None,
        }
    }
}

/// Minimal classification forwarded to the external metadata fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUrl {
    pub provider: MusicProvider,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub is_private: bool,
    pub sanitized_url: String,
}

impl From<ParsedMusicUrl> for ResolvedUrl {
    fn from(parsed: ParsedMusicUrl) -> Self {
        Self {
            provider: parsed.provider,
            content_type: parsed.content_type,
            is_private: parsed.is_private,
            sanitized_url: parsed.sanitized_url,
        }
    }
}

/// Full classification of a request, honouring forced provider and expected type.
pub fn classify(
    registry: &ParserRegistry,
    request: &ResolveRequest,
) -> Result<ParsedMusicUrl, InvalidMusicUrlError> {
    let parsed = match request.provider {
        Some(provider) => registry.parse_as(&request.url, provider)?,
        None => registry.parse(&request.url)?,
    };

    if let Some(expected) = request.preferred_type {
        if parsed.content_type != expected {
            return Err(InvalidMusicUrlError::new(
                &request.url,
                format!("Expected {expected} URL, got {}", parsed.content_type),
            ));
        }
    }
    Ok(parsed)
}

/// Classify a request and reduce it to the summary the metadata fetcher consumes.
pub fn resolve(
    registry: &ParserRegistry,
    request: &ResolveRequest,
) -> Result<ResolvedUrl, InvalidMusicUrlError> {
    let parsed = classify(registry, request)?;
    tracing::info!(
        provider = %parsed.provider,
        content_type = %parsed.content_type,
        is_private = parsed.is_private,
        "resolved {}",
        parsed.redacted_url()
    );
    Ok(parsed.into())
}
