use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use futures::future::join_all;
use serde_json::{Map, Value};
use tabsense_analyzer::guess_indentation;
use tabsense_core::IndentGuess;
use tabsense_text::LineBuffer;
use tabsense_utils::{display_report, find_text_files, get_relative_path, looks_like_text};
use thiserror::Error;
use tokio::fs::read;

use crate::{context::CommandContext, options::FormatOptions};

/// Error type for files that cannot be analyzed as UTF-8 text.
///
/// Files discovered by the walker are skipped on this error; files named
/// explicitly on the command line escalate it.
#[derive(Debug, Error)]
#[error("Not UTF-8 text - {}", .0.display())]
pub struct NotText(pub PathBuf);

#[derive(Args, Debug)]
#[command(about = "Report the guessed indentation of files")]
pub struct ReportArgs {
    /// Files or directories to analyze (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Fallback tab width, overriding the config file
    #[arg(short, long)]
    pub tab_size: Option<usize>,

    /// Fall back to tab indentation instead of spaces
    #[arg(short, long, default_value = "false")]
    pub use_tabs: bool,

    #[arg(short, long)]
    pub format: Option<FormatOptions>,
}

/// Analyze the requested paths and print one verdict per file.
///
/// # Errors
/// Returns error if config loading, file discovery, or reading an explicitly
/// named file fails.
pub async fn handle_report(args: &ReportArgs) -> Result<()> {
    let context = CommandContext::new(None).await?;
    let default_tab_size = args.tab_size.unwrap_or(context.config.tab_size);
    let default_insert_spaces = if args.use_tabs {
        false
    } else {
        context.config.insert_spaces
    };

    // (path, named explicitly on the command line)
    let mut targets: Vec<(PathBuf, bool)> = Vec::new();
    if args.paths.is_empty() {
        for path in find_text_files(&context.root, &context.config)? {
            targets.push((path, false));
        }
    } else {
        for path in &args.paths {
            if path.is_dir() {
                for found in find_text_files(path, &context.config)? {
                    targets.push((found, false));
                }
            } else {
                targets.push((path.clone(), true));
            }
        }
    }

    let guesses = join_all(
        targets
            .iter()
            .map(|(path, _)| analyze_file(path, default_tab_size, default_insert_spaces)),
    )
    .await;

    let mut lines = Vec::new();
    let mut json = Map::new();
    for ((path, explicit), guess) in targets.iter().zip(guesses) {
        let guess = match guess {
            Ok(guess) => guess,
            Err(error) if !explicit && error.downcast_ref::<NotText>().is_some() => continue,
            Err(error) => return Err(error),
        };
        let relative_path = get_relative_path(&context.root, path);
        lines.push(display_report(&relative_path, &guess));
        json.insert(relative_path, serde_json::to_value(guess)?);
    }

    let format = args.format.clone().unwrap_or(FormatOptions::Stdout);
    format.print(
        &lines.join("\n"),
        &serde_json::to_string_pretty(&Value::Object(json))?,
    );
    Ok(())
}

/// Guess one file's indentation.
///
/// # Errors
/// Returns [`NotText`] for binary or non-UTF-8 content, or the underlying IO
/// error for unreadable paths.
pub async fn analyze_file(
    path: &Path,
    default_tab_size: usize,
    default_insert_spaces: bool,
) -> Result<IndentGuess> {
    let bytes = read(path)
        .await
        .context(format!("Failed to read {}", path.display()))?;
    if !looks_like_text(&bytes) {
        return Err(NotText(path.to_path_buf()).into());
    }
    let text = String::from_utf8(bytes).map_err(|_| NotText(path.to_path_buf()))?;
    let buffer = LineBuffer::new(text);
    Ok(guess_indentation(
        &buffer,
        default_tab_size,
        default_insert_spaces,
    ))
}
