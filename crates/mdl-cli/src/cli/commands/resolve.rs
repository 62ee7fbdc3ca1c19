//! `mdl resolve <json>` – answer a resolve request body the way the HTTP endpoint does.

use anyhow::{Context, Result};
use mdl_core::parser::ParserRegistry;
use mdl_core::resolver::{self, ResolveRequest};
use std::io::Read;

pub fn run_resolve(registry: &ParserRegistry, request: &str) -> Result<()> {
    let body = if request == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read request from stdin")?;
        buf
    } else {
        request.to_string()
    };
    let request: ResolveRequest =
        serde_json::from_str(&body).context("parse resolve request JSON")?;
    let resolved = resolver::resolve(registry, &request)?;
    println!("{}", serde_json::to_string(&resolved)?);
    Ok(())
}
