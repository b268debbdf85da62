//! Backend health check.

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use scribe_client::{BackendClient, BackendConfig, Endpoint};

pub async fn execute(backend: BackendConfig) -> Result<()> {
    let url = backend.base_url.clone();
    let client = BackendClient::new(backend)?;

    match client.get(Endpoint::Health).await {
        Ok(body) => {
            debug!(body = %body, "Backend health response");
            println!("{} Backend reachable at {}", "✓".green(), url);
            Ok(())
        }
        Err(e) => {
            println!("{} Backend not reachable at {}", "✗".red(), url);
            Err(e.into())
        }
    }
}
