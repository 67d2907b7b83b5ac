//! queue-stats CLI entry point.
//!
//! Prints the lengths of the pending, processing, and timed-out lists of a
//! job queue.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use satwrap_common::ConfigFile;
use satwrap_queue::{QueueStats, RedisBackend};

/// Show how many jobs are pending, processing, and timed out in a queue.
#[derive(Debug, Parser)]
#[command(name = "queue-stats", version, about)]
struct Cli {
    /// Name of the queue (list key).
    #[arg(long, env = "QUEUE_STATS_QNAME")]
    qname: String,

    /// Store host [default: localhost].
    #[arg(long, env = "QUEUE_STATS_HOST")]
    host: Option<String>,

    /// Store port [default: 6379].
    #[arg(long, env = "QUEUE_STATS_PORT")]
    port: Option<u16>,

    /// TOML configuration file with a `[queue]` section.
    #[arg(long, env = "SATWRAP_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let defaults = match &cli.config {
        Some(path) => {
            ConfigFile::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
                .queue
        }
        None => ConfigFile::default().queue,
    };
    let host = cli.host.unwrap_or(defaults.host);
    let port = cli.port.unwrap_or(defaults.port);

    let mut backend = RedisBackend::connect(&host, port)?;
    let stats = QueueStats::collect(&mut backend, &cli.qname)
        .with_context(|| format!("Failed to read queue '{}'", cli.qname))?;

    println!("{stats}");

    Ok(())
}
