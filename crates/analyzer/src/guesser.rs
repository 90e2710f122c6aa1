use tabsense_core::{IndentGuess, LineSource};

use crate::classify::classify_line;
use crate::spaces_diff::spaces_diff;

/// Hard cap on scanned lines; material past it never influences the verdict.
pub const MAX_LINES_TO_SCAN: usize = 10_000;

/// Tab widths the vote may select, in preference order. Ties keep the earlier
/// (smaller) candidate because later candidates must strictly improve.
const ALLOWED_TAB_SIZES: [usize; 4] = [2, 4, 6, 8];

/// Largest allowed candidate; pairwise scores above it are discarded.
const MAX_TAB_SIZE_GUESS: usize = 8;

/// Guesses a document's indentation style and tab width from the statistics of
/// its leading whitespace.
///
/// One pass over at most the first [`MAX_LINES_TO_SCAN`] lines: each
/// content-bearing line votes tabs or spaces, and each pair of consecutive
/// content lines contributes a space-equivalent indentation delta to a
/// per-width histogram. Whitespace-only lines are skipped without moving the
/// previous-line cursor. Always returns a verdict; when the signal is absent or
/// tied it degrades to the supplied defaults.
pub fn guess_indentation<S>(
    source: &S,
    default_tab_size: usize,
    default_insert_spaces: bool,
) -> IndentGuess
where
    S: LineSource + ?Sized,
{
    let lines_count = source.line_count().min(MAX_LINES_TO_SCAN);

    // lines whose indentation holds at least one tab
    let mut lines_indented_with_tabs = 0usize;
    // lines indented with two or more spaces and no tabs
    let mut lines_indented_with_spaces = 0usize;

    // latest content-bearing line and its measured indentation
    let mut previous_line_text = "";
    let mut previous_line_indentation = 0usize;

    let mut spaces_diff_count = [0usize; MAX_TAB_SIZE_GUESS + 1];

    for line_number in 1..=lines_count {
        let line = classify_line(source, line_number);
        if !line.has_content {
            continue;
        }

        if line.tabs > 0 {
            lines_indented_with_tabs += 1;
        } else if line.spaces > 1 {
            // a single leading space is too weak a signal to count
            lines_indented_with_spaces += 1;
        }

        let current_line_text = source.line_content(line_number);
        let diff = spaces_diff(
            previous_line_text,
            previous_line_indentation,
            current_line_text,
            line.indentation,
        );
        if diff <= MAX_TAB_SIZE_GUESS {
            spaces_diff_count[diff] += 1;
        }

        previous_line_text = current_line_text;
        previous_line_indentation = line.indentation;
    }

    // the end of the document counts as one last dedent to column zero
    let closing_diff = spaces_diff(previous_line_text, previous_line_indentation, "", 0);
    if closing_diff <= MAX_TAB_SIZE_GUESS {
        spaces_diff_count[closing_diff] += 1;
    }

    let mut insert_spaces = default_insert_spaces;
    if lines_indented_with_tabs != lines_indented_with_spaces {
        insert_spaces = lines_indented_with_tabs < lines_indented_with_spaces;
    }

    let mut tab_size = default_tab_size;
    // A tab-indented document keeps its default width unless some candidate
    // clears a tenth of the scanned line count.
    let mut tab_size_score = if insert_spaces {
        0.0
    } else {
        0.1 * lines_count as f64
    };
    for candidate in ALLOWED_TAB_SIZES {
        let candidate_score = spaces_diff_count[candidate] as f64;
        if candidate_score > tab_size_score {
            tab_size_score = candidate_score;
            tab_size = candidate;
        }
    }

    IndentGuess {
        insert_spaces,
        tab_size,
    }
}
