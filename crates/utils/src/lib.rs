mod display_report;
mod find_text_files;
mod get_config;
mod get_relative_path;
mod looks_like_text;

pub use display_report::display_report;
pub use find_text_files::find_text_files;
pub use get_config::get_config;
pub use get_relative_path::get_relative_path;
pub use looks_like_text::looks_like_text;
