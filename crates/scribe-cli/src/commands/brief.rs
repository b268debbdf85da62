//! Brief extraction for diagnosing research responses.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

use scribe_core::normalize_brief;

use crate::output;

#[derive(Args)]
pub struct BriefArgs {
    /// JSON file with a research response (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Print the brief as JSON only
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: BriefArgs) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let value: Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let normalized = normalize_brief(&value)?;

    if args.json {
        println!("{}", normalized.to_json_string()?);
    } else {
        output::print_brief(&normalized);
    }
    Ok(())
}
