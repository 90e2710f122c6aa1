use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    commands::{ConfigArgs, InitArgs, ReportArgs, handle_config, handle_init, handle_report},
    options::FormatOptions,
};

pub mod commands;
mod context;
pub mod options;

pub use commands::NotText;

#[derive(Parser, Debug)]
#[command(
    name = "tabsense",
    author,
    version,
    about = "Guesses whether files indent with tabs or spaces, and at what width, from their leading whitespace",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files or directories to analyze (default: current directory)
    paths: Vec<PathBuf>,

    #[arg(short, long)]
    tab_size: Option<usize>,

    #[arg(short, long, default_value = "false")]
    use_tabs: bool,

    #[arg(short, long)]
    format: Option<FormatOptions>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if argument handling or the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_report(&ReportArgs {
            paths: cli.paths,
            tab_size: cli.tab_size,
            use_tabs: cli.use_tabs,
            format: cli.format,
        })
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from(["tabsense", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init(_))));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["tabsense", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn test_cli_parsing_default_with_paths() {
        let cli = Cli::parse_from(["tabsense", "src", "tests"]);
        assert!(cli.command.is_none());
        assert_eq!(
            cli.paths,
            vec![PathBuf::from("src"), PathBuf::from("tests")]
        );
    }

    #[test]
    fn test_cli_parsing_default_with_options() {
        let cli = Cli::parse_from(["tabsense", "--tab-size", "2", "--use-tabs", "src"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.tab_size, Some(2));
        assert!(cli.use_tabs);
    }

    #[test]
    fn test_cli_parsing_with_format() {
        let cli = Cli::parse_from(["tabsense", "--format", "json"]);
        assert!(matches!(cli.format, Some(FormatOptions::Json)));
    }
}
