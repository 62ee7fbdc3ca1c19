//! `mdl check <url>` – which provider, if any, claims a link.

use mdl_core::parser::ParserRegistry;

pub fn run_check(registry: &ParserRegistry, url: &str) {
    match registry.claiming_provider(url) {
        Some(provider) => println!("{provider}"),
        None => println!("unsupported"),
    }
}
