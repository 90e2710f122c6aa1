pub mod classify;
pub mod guesser;
pub mod spaces_diff;

// Re-export for convenience
pub use classify::{LineIndent, classify_line};
pub use guesser::{MAX_LINES_TO_SCAN, guess_indentation};
pub use spaces_diff::spaces_diff;
