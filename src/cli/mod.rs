//! CLI command handling

pub mod analyze;
pub mod config;
pub mod output;

pub use analyze::*;
pub use config::*;
pub use output::*;
