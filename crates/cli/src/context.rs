use std::path::PathBuf;

use anyhow::Result;
use tabsense_core::Config;
use tabsense_utils::get_config;

/// Root directory and effective configuration shared by commands.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if resolving the current directory or reading the config fails.
    pub async fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };
        let config = get_config(&root).await?;
        Ok(Self { root, config })
    }
}
