pub mod commands;
pub mod logging;
pub mod types;

pub use types::OutputFormat;
