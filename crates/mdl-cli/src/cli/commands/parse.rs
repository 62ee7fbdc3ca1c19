//! `mdl parse <url>` – classify a link.

use anyhow::Result;
use mdl_core::config::OutputFormat;
use mdl_core::parser::{ContentType, MusicProvider, ParsedMusicUrl, ParserRegistry};
use mdl_core::resolver::{self, ResolveRequest};

pub fn run_parse(
    registry: &ParserRegistry,
    url: &str,
    provider: Option<MusicProvider>,
    expect: Option<ContentType>,
    format: OutputFormat,
) -> Result<()> {
    let request = ResolveRequest {
        url: url.to_string(),
        provider,
        preferred_type: expect,
    };
    let parsed = resolver::classify(registry, &request)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        OutputFormat::Text => print!("{}", render_text(&parsed)),
    }
    Ok(())
}

/// Aligned `key: value` lines; slugs that are absent are omitted.
pub(crate) fn render_text(parsed: &ParsedMusicUrl) -> String {
    let mut rows: Vec<(&str, String)> = vec![
        ("provider", parsed.provider.to_string()),
        ("type", parsed.content_type.to_string()),
        (
            "private",
            if parsed.is_private { "yes" } else { "no" }.to_string(),
        ),
        ("sanitized", parsed.sanitized_url.clone()),
    ];
    let m = &parsed.metadata;
    for (key, value) in [
        ("artist", &m.artist_slug),
        ("track", &m.track_slug),
        ("playlist", &m.playlist_slug),
        ("album", &m.album_slug),
        ("token", &m.secret_token),
    ] {
        if let Some(v) = value {
            rows.push((key, v.clone()));
        }
    }

    let mut out = String::new();
    for (key, value) in rows {
        out.push_str(&format!("{:<10} {}\n", format!("{key}:"), value));
    }
    out
}
