use colored::*;
use tabsense_core::IndentGuess;

/// One colored report line for a single analyzed file.
#[must_use]
pub fn display_report(relative_path: &str, guess: &IndentGuess) -> String {
    let tag = if guess.insert_spaces {
        "[spaces]"
    } else {
        "[tabs]"
    };
    format!(
        "{} {} {} {}",
        tag.bright_blue().bold(),
        relative_path.bright_white().bold(),
        "→".bright_cyan(),
        format!("{}", guess).bright_green()
    )
}
