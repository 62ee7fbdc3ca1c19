//! Music URL parsing: provider detection, classification and sanitization.
//!
//! Each provider implements [`MusicUrlParser`]; a [`ParserRegistry`] routes an
//! incoming URL to the first parser that claims it.

mod error;
mod normalize;
mod registry;
mod soundcloud;
mod types;

pub use error::InvalidMusicUrlError;
pub use normalize::{host_matches_domain, host_of, normalize_url, sanitize_url, strip_query};
pub use registry::ParserRegistry;
pub use soundcloud::SoundCloudParser;
pub use types::{ContentType, MusicProvider, ParsedMusicUrl, UrlMetadata};

/// Core trait that all provider parsers must implement
pub trait MusicUrlParser: Send + Sync {
    /// Provider this parser owns. Unique within a registry.
    fn provider(&self) -> MusicProvider;

    /// Whether this parser claims the URL. Must not panic, whatever the input.
    fn can_parse(&self, url: &str) -> bool;

    /// Classify a URL and extract its identifiers
    ///
    /// # Errors
    /// [`InvalidMusicUrlError`] when the URL is not this provider's, matches no
    /// known path shape, or a required slug is empty. Never returns a
    /// partially populated result.
    fn parse(&self, url: &str) -> Result<ParsedMusicUrl, InvalidMusicUrlError>;

    /// Canonical form of the URL: `https://` scheme, query string removed.
    fn sanitize(&self, url: &str) -> String;
}
