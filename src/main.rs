//! satwrap CLI entry point.
//!
//! Runs one SAT solver under `runsolver` and prints the ParamILS result line.
//! Logs go to stderr; stdout carries only the result line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use satwrap_common::{ConfigFile, HarnessError, WrapperConfig};
use satwrap_core::request::POSITIONAL_ARGS;
use satwrap_core::{InvocationReporter, InvocationRequest};

/// Run a SAT solver under runsolver and report the result for ParamILS.
#[derive(Debug, Parser)]
#[command(name = "satwrap", version, about)]
struct Cli {
    /// TOML configuration file with solver paths and limits.
    #[arg(long, env = "SATWRAP_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// <instance> <instance_info> <cutoff_time> <cutoff_length> <seed> <reserved> <solver>
    ///
    /// Trailing arguments after the solver name are ignored.
    #[arg(
        value_name = "ARGS",
        required = true,
        num_args = POSITIONAL_ARGS..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<WrapperConfig> {
    let Some(path) = path else {
        return Ok(WrapperConfig::default());
    };

    let file = ConfigFile::from_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    Ok(file.wrapper)
}

/// Top-level diagnostic for a failed invocation.
fn failure_context(err: &HarnessError) -> &'static str {
    if err.is_resolution_failure() {
        "Could not resolve solver executables"
    } else if err.is_spawn_failure() {
        "Could not start the runsolver supervisor"
    } else {
        "Solver invocation failed"
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,satwrap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "Configuration loaded");

    let request = InvocationRequest::from_args(cli.args).context("Invalid arguments")?;
    let report = InvocationReporter::new(config).run(&request).map_err(|e| {
        let context = failure_context(&e);
        anyhow::Error::new(e).context(context)
    })?;

    if report.is_crashed() {
        eprintln!("{}", report.output.stdout);
        eprintln!("{}", report.output.stderr);
    }

    println!("{}", report.result);

    Ok(())
}
