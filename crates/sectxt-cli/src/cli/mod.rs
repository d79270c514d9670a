//! CLI for checking a host's security.txt.

mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use sectxt_core::config::{self, SectxtConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Fetch and validate a security.txt file.
#[derive(Debug, Parser)]
#[command(name = "sectxt", version)]
#[command(about = "Check a host (or local file) for a security.txt", long_about = None)]
pub struct Cli {
    /// The address to check for a security.txt file (URL or local path).
    #[arg(short, long, value_name = "ADDR")]
    pub address: Option<String>,

    /// Verify Encryption/Acknowledgements links are https and answer 200.
    #[arg(long)]
    pub live: bool,

    /// Reject Encryption/Acknowledgements links on a different host.
    #[arg(long)]
    pub same_origin: bool,

    /// Refuse plain http requests.
    #[arg(long)]
    pub force_tls: bool,

    /// Per-request timeout in seconds (overrides config).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read configuration from this file instead of ~/.config/sectxt/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the record as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<ExitCode> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<ExitCode> {
        let Some(addr) = self.address.as_deref() else {
            eprintln!("{}", Cli::command().render_help());
            return Ok(ExitCode::FAILURE);
        };

        let cfg = self.resolve_config(load_config(self.config.as_deref())?);
        tracing::debug!("effective config: {:?}", cfg);

        let sec = sectxt_core::read(addr, &cfg)?;
        tracing::info!(addr, "security.txt parsed");
        if self.json {
            output::print_json(&sec)?;
        } else {
            output::print_text(addr, &sec);
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Applies command-line overrides on top of the loaded config.
    fn resolve_config(&self, mut cfg: SectxtConfig) -> SectxtConfig {
        if self.live {
            cfg.validation.live_validation = true;
        }
        if self.same_origin {
            cfg.validation.enforce_same_origin = true;
        }
        if self.force_tls {
            cfg.fetch.force_tls = true;
        }
        if let Some(secs) = self.timeout {
            cfg.fetch.timeout_secs = secs;
        }
        cfg
    }
}

fn load_config(path: Option<&Path>) -> Result<SectxtConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => Ok(config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            SectxtConfig::default()
        })),
    }
}

#[cfg(test)]
mod tests;
