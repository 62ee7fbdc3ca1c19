use super::error::InvalidMusicUrlError;
use super::types::{MusicProvider, ParsedMusicUrl};
use super::{MusicUrlParser, SoundCloudParser};
use std::sync::Arc;

/// Ordered set of provider parsers with first-match dispatch.
///
/// Built once at startup and shared read-only afterwards; `parse` and
/// `sanitize` take `&self` and never touch the parser list.
#[derive(Default, Clone)]
pub struct ParserRegistry {
    /// Registration order is dispatch order.
    parsers: Vec<Arc<dyn MusicUrlParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider parser in default configuration.
    pub fn with_default_parsers() -> Self {
        let mut registry = Self::new();
        registry.register(SoundCloudParser::new());
        registry
    }

    /// Register a parser unless its provider is already present.
    ///
    /// Returns `false` when an earlier registration for the same provider
    /// exists; that one stays active and `parser` is dropped.
    pub fn register(&mut self, parser: impl MusicUrlParser + 'static) -> bool {
        self.register_shared(Arc::new(parser))
    }

    /// Same as [`register`](Self::register) for an already shared parser.
    pub fn register_shared(&mut self, parser: Arc<dyn MusicUrlParser>) -> bool {
        let provider = parser.provider();
        if self.parsers.iter().any(|p| p.provider() == provider) {
            tracing::warn!(%provider, "parser for provider is already registered");
            return false;
        }
        tracing::debug!(%provider, "registered url parser");
        self.parsers.push(parser);
        true
    }

    /// Register each parser in order.
    pub fn register_many<I>(&mut self, parsers: I)
    where
        I: IntoIterator<Item = Arc<dyn MusicUrlParser>>,
    {
        for parser in parsers {
            self.register_shared(parser);
        }
    }

    fn select(&self, url: &str) -> Option<&dyn MusicUrlParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(url))
            .map(|p| &**p)
    }

    /// Classify `url` with the first registered parser that claims it.
    pub fn parse(&self, url: &str) -> Result<ParsedMusicUrl, InvalidMusicUrlError> {
        if url.trim().is_empty() {
            return Err(InvalidMusicUrlError::empty(url));
        }
        match self.select(url) {
            Some(parser) => parser.parse(url),
            None => Err(InvalidMusicUrlError::new(
                url,
                format!(
                    "No parser available for this URL. Supported providers: {}",
                    self.provider_list()
                ),
            )),
        }
    }

    /// Classify `url` with one specific provider, skipping dispatch.
    pub fn parse_as(
        &self,
        url: &str,
        provider: MusicProvider,
    ) -> Result<ParsedMusicUrl, InvalidMusicUrlError> {
        if url.trim().is_empty() {
            return Err(InvalidMusicUrlError::empty(url));
        }
        let parser = self.parser(provider).ok_or_else(|| {
            InvalidMusicUrlError::new(url, format!("Provider {provider} is not registered"))
        })?;
        parser.parse(url)
    }

    /// Sanitize `url` with the first registered parser that claims it.
    pub fn sanitize(&self, url: &str) -> Result<String, InvalidMusicUrlError> {
        if url.trim().is_empty() {
            return Err(InvalidMusicUrlError::empty(url));
        }
        self.select(url)
            .map(|parser| parser.sanitize(url))
            .ok_or_else(|| InvalidMusicUrlError::new(url, "No parser available for this URL"))
    }

    /// Provider of the first parser claiming `url`, if any. Never fails.
    pub fn claiming_provider(&self, url: &str) -> Option<MusicProvider> {
        self.select(url).map(|p| p.provider())
    }

    /// Snapshot of the registered parsers; changing it leaves the registry untouched.
    pub fn parsers(&self) -> Vec<Arc<dyn MusicUrlParser>> {
        self.parsers.clone()
    }

    /// Look up a parser by provider.
    pub fn parser(&self, provider: MusicProvider) -> Option<&dyn MusicUrlParser> {
        self.parsers
            .iter()
            .find(|p| p.provider() == provider)
            .map(|p| &**p)
    }

    /// Registered providers in dispatch order.
    pub fn providers(&self) -> Vec<MusicProvider> {
        self.parsers.iter().map(|p| p.provider()).collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.parsers.clear();
    }

    fn provider_list(&self) -> String {
        self.providers()
            .iter()
            .map(MusicProvider::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ContentType, UrlMetadata};

    /// Minimal parser claiming one host, used to exercise dispatch.
    struct HostParser {
        provider: MusicProvider,
        host: &'static str,
        tag: &'static str,
    }

    impl MusicUrlParser for HostParser {
        fn provider(&self) -> MusicProvider {
            self.provider
        }

        fn can_parse(&self, url: &str) -> bool {
            url.contains(self.host)
        }

        fn parse(&self, url: &str) -> Result<ParsedMusicUrl, InvalidMusicUrlError> {
            Ok(ParsedMusicUrl {
                provider: self.provider,
                content_type: ContentType::Track,
                is_private: false,
                sanitized_url: self.sanitize(url),
                metadata: UrlMetadata {
                    artist_slug: Some(self.tag.to_string()),
                    track_slug: Some("t".to_string()),
                    ..UrlMetadata::default()
                },
                original_url: url.to_string(),
            })
        }

        fn sanitize(&self, url: &str) -> String {
            crate::parser::sanitize_url(url)
        }
    }

    fn spotify(tag: &'static str) -> HostParser {
        HostParser {
            provider: MusicProvider::Spotify,
            host: "spotify.com",
            tag,
        }
    }

    #[test]
    fn empty_input_rejected() {
        let registry = ParserRegistry::with_default_parsers();
        for url in ["", "   ", "\n\t"] {
            let err = registry.parse(url).unwrap_err();
            assert_eq!(err.reason, "URL cannot be empty");
            assert_eq!(registry.sanitize(url).unwrap_err().reason, "URL cannot be empty");
        }
    }

    #[test]
    fn unsupported_provider_lists_registered() {
        let mut registry = ParserRegistry::with_default_parsers();
        let err = registry.parse("https://spotify.com/track/123").unwrap_err();
        assert!(err.reason.contains("Supported providers: soundcloud"), "{}", err.reason);

        registry.register(HostParser {
            provider: MusicProvider::YouTube,
            host: "youtube.com",
            tag: "yt",
        });
        let err = registry.parse("https://deezer.com/track/1").unwrap_err();
        assert!(err.reason.ends_with("soundcloud, youtube"), "{}", err.reason);
    }

    #[test]
    fn malformed_soundcloud_url_reason_passes_through() {
        let registry = ParserRegistry::with_default_parsers();
        let err = registry.parse("https://soundcloud.com/").unwrap_err();
        assert_eq!(err.reason, "Invalid SoundCloud URL format");
    }

    #[test]
    fn duplicate_registration_is_noop() {
        let mut registry = ParserRegistry::new();
        assert!(registry.register(spotify("first")));
        assert!(!registry.register(spotify("second")));
        assert_eq!(registry.parsers().len(), 1);

        let r = registry.parse("https://spotify.com/track/1").unwrap();
        assert_eq!(r.metadata.artist_slug.as_deref(), Some("first"));
    }

    #[test]
    fn register_many_keeps_order_and_skips_duplicates() {
        let mut registry = ParserRegistry::new();
        registry.register_many(vec![
            Arc::new(SoundCloudParser::new()) as Arc<dyn MusicUrlParser>,
            Arc::new(spotify("a")),
            Arc::new(SoundCloudParser::new().with_mobile_links(true)),
        ]);
        assert_eq!(
            registry.providers(),
            vec![MusicProvider::SoundCloud, MusicProvider::Spotify]
        );
        // First SoundCloud registration (no mobile links) stays active.
        assert!(registry.parse("https://m.soundcloud.com/a/b").is_err());
    }

    #[test]
    fn disjoint_providers_are_order_independent() {
        let urls = [
            "https://soundcloud.com/a/b",
            "https://spotify.com/track/1",
            "https://soundcloud.com/a/sets/p/s-X",
        ];
        let mut forward = ParserRegistry::new();
        forward.register(SoundCloudParser::new());
        forward.register(spotify("s"));
        let mut reverse = ParserRegistry::new();
        reverse.register(spotify("s"));
        reverse.register(SoundCloudParser::new());

        for url in urls {
            assert_eq!(forward.parse(url).unwrap(), reverse.parse(url).unwrap());
        }
    }

    #[test]
    fn parsers_returns_defensive_copy() {
        let registry = ParserRegistry::with_default_parsers();
        let mut copy = registry.parsers();
        copy.clear();
        assert_eq!(registry.len(), 1);
        assert!(registry.parser(MusicProvider::SoundCloud).is_some());
        assert!(registry.parser(MusicProvider::Spotify).is_none());
    }

    #[test]
    fn sanitize_dispatches_or_fails() {
        let registry = ParserRegistry::with_default_parsers();
        assert_eq!(
            registry.sanitize("soundcloud.com/artist/track?test=1").unwrap(),
            "https://soundcloud.com/artist/track"
        );
        let err = registry.sanitize("https://youtube.com/watch?v=abc").unwrap_err();
        assert_eq!(err.reason, "No parser available for this URL");
    }

    #[test]
    fn parse_as_forces_provider() {
        let mut registry = ParserRegistry::with_default_parsers();
        registry.register(spotify("s"));

        let r = registry
            .parse_as("https://soundcloud.com/a/b", MusicProvider::SoundCloud)
            .unwrap();
        assert_eq!(r.provider, MusicProvider::SoundCloud);

        let err = registry
            .parse_as("https://spotify.com/track/1", MusicProvider::SoundCloud)
            .unwrap_err();
        assert_eq!(err.reason, "Not a SoundCloud URL");

        let err = registry
            .parse_as("https://music.apple.com/x", MusicProvider::AppleMusic)
            .unwrap_err();
        assert_eq!(err.reason, "Provider apple-music is not registered");
    }

    #[test]
    fn clear_empties_registry() {
        let mut registry = ParserRegistry::with_default_parsers();
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
        let err = registry.parse("https://soundcloud.com/a/b").unwrap_err();
        assert!(err.reason.starts_with("No parser available"));
    }

    #[test]
    fn claiming_provider_never_fails() {
        let registry = ParserRegistry::with_default_parsers();
        assert_eq!(
            registry.claiming_provider("soundcloud.com/a/b"),
            Some(MusicProvider::SoundCloud)
        );
        assert_eq!(registry.claiming_provider(""), None);
        assert_eq!(registry.claiming_provider("https://spotify.com/x"), None);
    }
}
