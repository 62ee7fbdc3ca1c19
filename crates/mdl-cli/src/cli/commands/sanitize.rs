//! `mdl sanitize <url>` – strip tracking parameters.

use anyhow::Result;
use mdl_core::parser::ParserRegistry;

pub fn run_sanitize(registry: &ParserRegistry, url: &str) -> Result<()> {
    let clean = registry.sanitize(url)?;
    println!("{clean}");
    Ok(())
}
