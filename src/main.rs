use anyhow::{Context, Result};
use clap::Parser;
use lightboard::cli::Cli;
use lightboard::client::{LightClient, TimeoutConfig};
use lightboard::config::Config;
use lightboard::logging::{init_tracing, LogMode};
use lightboard::ui::app::App;
use lightboard::ui::runtime;
use std::io::Write;
use std::sync::Arc;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_endpoint_override(cli.endpoint);

    init_tracing(if cli.print {
        LogMode::Headless
    } else {
        LogMode::Tui
    });
    tracing::info!(
        path = %config_path.display(),
        endpoint = %config.endpoint,
        "Starting lightboard"
    );

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = Arc::new(LightClient::new(
        config.endpoint(),
        TimeoutConfig::from(&config),
    )?);
    let mut app = App::new(config.endpoint());

    if cli.print {
        let output = runtime::run_headless(&mut app, client, async_runtime.handle());
        let mut stdout = std::io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    } else {
        runtime::run(&mut app, client, async_runtime.handle(), config.tick_rate())?;
    }

    async_runtime.shutdown_background();
    Ok(())
}
