use serde::{Deserialize, Serialize};

/// Loaded from `.tabsense.json`, controls analysis fallbacks and walker excludes.
///
/// `tab_size` and `insert_spaces` are the defaults a document falls back to when its
/// statistical signal is absent or tied; `ignore` holds glob patterns for files and
/// directories the walker skips.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Fallback tab width (default: 4)
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Fallback indent style (default: spaces)
    #[serde(default = "default_insert_spaces")]
    pub insert_spaces: bool,

    /// Glob patterns for files/directories to skip (e.g., "target/**")
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_tab_size() -> usize {
    4
}

fn default_insert_spaces() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            insert_spaces: default_insert_spaces(),
            ignore: Vec::new(),
        }
    }
}
