use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use tabsense_core::Config;

/// Walks `root` and collects the candidate files to analyze.
///
/// Hidden files and anything matched by `.gitignore` are skipped by the walker;
/// the config's `ignore` globs are applied on top, matched against the path
/// relative to `root`. Results are sorted for stable output.
///
/// # Errors
/// Returns error if a glob pattern is invalid or the walk fails.
pub fn find_text_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let patterns = config
        .ignore
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).context(format!("Invalid ignore pattern - {pattern}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if patterns.iter().any(|pattern| pattern.matches_path(relative)) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}
