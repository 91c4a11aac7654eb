//! CLI for the authurl URL utilities.

mod commands;

use anyhow::Result;
use authurl_core::config;
use authurl_core::UrlContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_build, run_check_redirect, run_dev_portal, run_merge, run_origins, run_sanitize,
    BuildArgs,
};

/// Top-level CLI for authurl.
#[derive(Debug, Parser)]
#[command(name = "authurl")]
#[command(about = "authurl: compose, sanitize and validate navigation URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/authurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compose a URL from a base, path, search, hash and hash sub-route.
    Build(BuildArgs),

    /// Print the href if it is safe to render; exits non-zero otherwise.
    Sanitize {
        /// Raw href value.
        href: String,
    },

    /// Fold a `#/path?query` sub-route into the URL's path and query.
    Merge {
        /// Absolute URL.
        url: String,
    },

    /// Decide whether a redirect target is allowed.
    CheckRedirect {
        /// Candidate redirect URL (absolute or relative).
        candidate: String,
        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the effective allowed redirect origins.
    Origins {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify a hostname as a development account-portal host.
    DevPortal {
        /// Hostname; defaults to the configured location's hostname.
        hostname: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let ctx = UrlContext::from_config(&cfg)?;

        match cli.command {
            CliCommand::Build(args) => run_build(&ctx, args)?,
            CliCommand::Sanitize { href } => run_sanitize(&href)?,
            CliCommand::Merge { url } => run_merge(&url)?,
            CliCommand::CheckRedirect { candidate, json } => {
                run_check_redirect(&ctx, &cfg, &candidate, json)?
            }
            CliCommand::Origins { json } => run_origins(&ctx, &cfg, json)?,
            CliCommand::DevPortal { hostname } => run_dev_portal(&ctx, hostname.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
