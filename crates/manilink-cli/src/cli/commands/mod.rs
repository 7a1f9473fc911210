//! CLI command handlers, one per file.

mod config;
mod link;
mod open;

pub use config::run_config;
pub use link::run_link;
pub use open::run_open;
