//! CLI command handlers, one file per command.

mod completions;
mod config;
mod extract;
mod verify;

pub use completions::run_completions;
pub use config::run_config;
pub use extract::run_extract;
pub use verify::run_verify;
