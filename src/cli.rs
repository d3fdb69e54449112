//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

/// Show the lights known to a light server.
#[derive(Parser, Debug)]
#[command(name = "lightboard", version, about, long_about = None)]
pub struct Cli {
    /// Base address of the light server, e.g. http://192.168.1.10:8000
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch once, print the list as plain text and exit
    #[arg(long)]
    pub print: bool,
}
