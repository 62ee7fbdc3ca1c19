//! CLI for the MDL music URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mdl_core::config::{self, OutputFormat};
use mdl_core::logging;
use mdl_core::parser::{ContentType, MusicProvider};
use std::path::PathBuf;

use commands::{
    run_batch, run_check, run_completions, run_man, run_parse, run_providers, run_resolve,
    run_sanitize,
};

/// Top-level CLI for the MDL music downloader's URL resolver.
#[derive(Debug, Parser)]
#[command(name = "mdl")]
#[command(about = "MDL: classify and sanitize music links", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/mdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a link and print provider, type, privacy and slugs.
    Parse {
        /// Track or playlist link, with or without https://.
        url: String,
        /// Only try this provider (e.g. soundcloud).
        #[arg(long)]
        provider: Option<MusicProvider>,
        /// Fail unless the link is this content type (track, playlist).
        #[arg(long, value_name = "TYPE")]
        expect: Option<ContentType>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical link without tracking parameters.
    Sanitize {
        url: String,
    },

    /// Report which provider claims a link. Never fails on unsupported links.
    Check {
        url: String,
    },

    /// Resolve a JSON request body ({"url": ..., "provider"?, "preferredType"?}).
    Resolve {
        /// Request JSON; `-` reads it from stdin.
        request: String,
    },

    /// List registered providers in dispatch order.
    Providers,

    /// Classify one link per line from a file (`-` for stdin).
    Batch {
        path: PathBuf,
        /// Print JSON lines instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print a roff man page.
    Man,
}

fn output_format(json: bool, cfg: &config::MdlConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        // Fall back to stderr if the state dir is unusable.
        if logging::init_logging(cfg.log_filter.as_deref()).is_err() {
            logging::init_logging_stderr(cfg.log_filter.as_deref());
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = config::build_registry(&cfg);

        match cli.command {
            CliCommand::Parse {
                url,
                provider,
                expect,
                json,
            } => run_parse(&registry, &url, provider, expect, output_format(json, &cfg))?,
            CliCommand::Sanitize { url } => run_sanitize(&registry, &url)?,
            CliCommand::Check { url } => run_check(&registry, &url),
            CliCommand::Resolve { request } => run_resolve(&registry, &request)?,
            CliCommand::Providers => run_providers(&registry),
            CliCommand::Batch { path, json } => {
                run_batch(&registry, &path, output_format(json, &cfg))?
            }
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
