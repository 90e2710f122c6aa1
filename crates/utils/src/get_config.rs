use std::path::Path;

use anyhow::{Context, Result};
use tabsense_core::Config;
use tokio::fs::read_to_string;

/// Loads `.tabsense.json` from `root`, falling back to defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_config(root: &Path) -> Result<Config> {
    let config_file = root.join(".tabsense.json");
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .context(format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content).context(format!("Invalid config {}", config_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = get_config(temp_dir.path()).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".tabsense.json"),
            r#"{"tabSize":2,"insertSpaces":false,"ignore":["target/**"]}"#,
        )
        .unwrap();
        let config = get_config(temp_dir.path()).await.unwrap();
        assert_eq!(config.tab_size, 2);
        assert!(!config.insert_spaces);
        assert_eq!(config.ignore, vec!["target/**".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_config_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".tabsense.json"), "{not json").unwrap();
        let result = get_config(temp_dir.path()).await;
        assert!(result.is_err());
    }
}
