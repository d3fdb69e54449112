pub mod cli;
pub mod client;
pub mod config;
pub mod light;
pub mod logging;
pub mod shutdown;
pub mod ui;
