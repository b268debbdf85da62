//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;

use scribe_client::{BackendConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};

pub mod brief;
pub mod health;
pub mod serve;

/// Scribe - content workflow relay for research, writing and branding agents
#[derive(Parser)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the agents backend
    #[arg(long, global = true, env = BACKEND_URL_ENV, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Timeout for backend calls, in seconds (no timeout when unset)
    #[arg(long, global = true, env = "SCRIBE_BACKEND_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay and the workflow pages
    Serve(serve::ServeArgs),

    /// Check that the agents backend is reachable
    Health,

    /// Extract the writing brief from a research response
    Brief(brief::BriefArgs),
}

impl Cli {
    pub fn backend_config(&self) -> Result<BackendConfig> {
        let config = BackendConfig::new(&self.backend_url)?
            .with_timeout(self.timeout_secs.map(Duration::from_secs));
        Ok(config)
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(ref args) => serve::execute(args, self.backend_config()?).await,
            Commands::Health => health::execute(self.backend_config()?).await,
            Commands::Brief(args) => brief::execute(args),
        }
    }
}
