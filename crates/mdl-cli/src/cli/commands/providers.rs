//! `mdl providers` – list registered providers.

use mdl_core::parser::ParserRegistry;

pub fn run_providers(registry: &ParserRegistry) {
    if registry.is_empty() {
        println!("No providers registered.");
        return;
    }
    for provider in registry.providers() {
        println!("{provider}");
    }
}
