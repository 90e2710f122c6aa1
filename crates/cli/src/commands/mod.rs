mod config;
mod init;
mod report;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use report::NotText;
pub use report::ReportArgs;
pub use report::handle_report;
