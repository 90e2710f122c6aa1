pub mod config;
pub mod guess;
pub mod line_source;

// Re-export for convenience
pub use config::Config;
pub use guess::IndentGuess;
pub use line_source::LineSource;
