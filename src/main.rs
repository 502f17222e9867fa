use clap::Parser;
use dumpchooser::{
    app::config::Config,
    cli::{self, Cli},
};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn main() {
    // Parse CLI arguments first to get verbose flag
    let cli = Cli::parse();

    // Config directory override must be in place before the logs dir is looked up
    if let Some(ref config_dir) = cli.config {
        dumpchooser::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    // Get logs directory (creates if needed)
    let logs_dir =
        dumpchooser::util::paths::get_logs_dir().unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&logs_dir).ok();

    // Daily rotating JSON log file
    let file_appender = tracing_appender::rolling::daily(&logs_dir, "app.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let log_level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::from_level(
                    log_level,
                )),
        )
        .init();

    tracing::info!("Starting dumpchooser");
    if let Some(ref config_dir) = cli.config {
        tracing::info!("Using config directory override: {:?}", config_dir);
    }
    tracing::trace!("CLI arguments: {:?}", cli);

    let exit_code = match Config::load() {
        Ok(config) => {
            tracing::debug!("Config loaded: {:?}", config);
            cli::handler::handle_command(cli.command, &config)
        }
        Err(e) => {
            tracing::error!("Failed to load config: {:#}", e);
            eprintln!("Error: {:#}", e);
            cli::error::ERROR
        }
    };

    // Flush buffered log lines before exiting
    drop(guard);
    std::process::exit(exit_code);
}
