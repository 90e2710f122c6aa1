use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective tabsense configuration")]
pub struct ConfigArgs {
    /// Directory whose config to show (default: current directory)
    pub path: Option<PathBuf>,
}

/// Display tabsense configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new(args.path.clone()).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
