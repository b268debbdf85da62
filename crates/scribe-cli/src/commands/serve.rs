//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use scribe_client::BackendConfig;
use scribe_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SCRIBE_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Mirror logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "scribe.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: &ServeArgs, backend: BackendConfig) -> Result<()> {
    println!();
    println!("  {} {}", "Scribe".cyan().bold(), "Content Workflow".bold());
    println!();
    println!("  {}      http://{}:{}", "Pages".green(), args.host, args.port);
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}    {}", "Backend".green(), backend.base_url);
    if args.log {
        println!("  {}        {}", "Log".green(), args.log_file.display());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let server = ServerConfig {
        host: args.host.clone(),
        port: args.port,
    };
    scribe_web::run_server(server, backend).await?;

    Ok(())
}
