//! `mdl batch <path>` – classify a list of links, one per line.

use anyhow::{Context, Result};
use mdl_core::config::OutputFormat;
use mdl_core::parser::ParserRegistry;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub fn run_batch(registry: &ParserRegistry, path: &Path, format: OutputFormat) -> Result<()> {
    let urls = if path == Path::new("-") {
        collect_urls(io::stdin().lock())?
    } else {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        collect_urls(BufReader::new(file)).with_context(|| format!("read {}", path.display()))?
    };

    let (lines, failed) = report(registry, &urls, format);
    for line in lines {
        println!("{line}");
    }
    tracing::info!(total = urls.len(), failed, "batch finished");
    if failed > 0 {
        anyhow::bail!("{failed} of {} URLs failed", urls.len());
    }
    Ok(())
}

/// Non-empty, non-comment lines, trimmed.
pub(crate) fn collect_urls(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        urls.push(line.to_string());
    }
    Ok(urls)
}

/// One output line per URL plus the number of failures.
pub(crate) fn report(
    registry: &ParserRegistry,
    urls: &[String],
    format: OutputFormat,
) -> (Vec<String>, usize) {
    let mut failed = 0;
    let lines = urls
        .iter()
        .map(|url| match (registry.parse(url), format) {
            (Ok(parsed), OutputFormat::Json) => json!({ "url": url, "result": parsed }).to_string(),
            (Ok(parsed), OutputFormat::Text) => format!(
                "ok\t{}\t{}\t{}",
                parsed.content_type,
                if parsed.is_private { "private" } else { "public" },
                parsed.sanitized_url
            ),
            (Err(err), OutputFormat::Json) => {
                failed += 1;
                json!({ "url": url, "error": err.reason }).to_string()
            }
            (Err(err), OutputFormat::Text) => {
                failed += 1;
                format!("error\t{}\t{}", err.reason, url)
            }
        })
        .collect();
    (lines, failed)
}
