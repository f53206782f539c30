//! gracefuld - hold resources open until a termination signal arrives
//!
//! Usage:
//!     gracefuld --config <path>
//!
//! See --help for more options.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use graceful_shutdown::config::{load_config, validate_log_level, Config, ShutdownMode};
use graceful_shutdown::resource::open_resources;
use graceful_shutdown::util::init_logging;
use graceful_shutdown::TracingLogger;

/// Hold configured resources open and release them in order on shutdown.
#[derive(Parser, Debug)]
#[command(name = "gracefuld")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Validate configuration and exit
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config).with_context(|| {
        format!(
            "failed to load configuration from '{}'",
            cli.config.display()
        )
    })?;

    // CLI overrides config, under the same rules
    if let Some(level) = cli.log_level.as_deref() {
        validate_log_level(level).map_err(anyhow::Error::msg)?;
    }
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.global.log_level);

    init_logging(log_level, &config.global.log_format).context("failed to initialize logging")?;

    if cli.validate {
        info!("Configuration is valid");
        println!("Configuration is valid.");
        println!("  Mode: {:?}", config.mode);
        println!("  Resources: {}", config.resources.len());
        for (index, resource) in config.resources.iter().enumerate() {
            println!("    {index}: {resource:?}");
        }
        return Ok(());
    }

    info!(
        config_path = %cli.config.display(),
        resources = config.resources.len(),
        mode = ?config.mode,
        "gracefuld starting"
    );

    run(config)
}

/// Run gracefuld with the given configuration.
fn run(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    runtime.block_on(async { run_async(config).await })
}

async fn run_async(config: Config) -> Result<()> {
    let mut resources =
        open_resources(&config.resources).context("failed to open configured resources")?;

    for (index, resource) in resources.iter().enumerate() {
        info!(index, resource = %resource, "holding resource");
    }

    match config.mode {
        ShutdownMode::Terminate => {
            match graceful_shutdown::handle_and_terminate(&TracingLogger, &mut resources)
                .await
                .context("failed to register signal listeners")?
            {}
        }
        ShutdownMode::Report => {
            let mut completion = graceful_shutdown::handle(&TracingLogger, &mut resources)
                .await
                .context("failed to register signal listeners")?;
            let report = completion.wait().await;
            info!(
                signal = %report.signal,
                closed = report.closed,
                failed = report.failed,
                "gracefuld stopped"
            );
            Ok(())
        }
    }
}
