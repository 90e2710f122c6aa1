use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabsense_core::Config;
use tokio::fs::write;

#[derive(Args, Debug)]
#[command(about = "Write a default .tabsense.json config")]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Write a default config file
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let config_file = root.join(".tabsense.json");
    if config_file.exists() {
        Err(anyhow::anyhow!("tabsense config already exists"))
    } else {
        if !args.dry_run {
            let content = format!("{}\n", serde_json::to_string_pretty(&Config::default())?);
            write(&config_file, content).await?;
        }

        println!("tabsense config written to {}", config_file.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            dry_run: false,
        };
        handle_init(&args).await.unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join(".tabsense.json")).unwrap();
        let config: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".tabsense.json"), "{}").unwrap();
        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            dry_run: false,
        };
        assert!(handle_init(&args).await.is_err());
    }

    #[tokio::test]
    async fn test_init_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            dry_run: true,
        };
        handle_init(&args).await.unwrap();
        assert!(!temp_dir.path().join(".tabsense.json").exists());
    }
}
