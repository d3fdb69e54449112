//! Configuration loading.
//!
//! Values are layered: built-in defaults, then the TOML config file, then
//! command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
