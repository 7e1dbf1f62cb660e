//! Monthly Charge CLI - computes a prorated monthly charge from a JSON request.
//!
//! Prints the total in cents on stdout, or the itemized breakdown as JSON
//! with `--breakdown`. Logs go to stderr; see [`observability`].

mod config;
mod observability;

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use monthly_charge::billing::{ChargeRequest, ProrationCalculator};
use tracing::debug;

use crate::{
    config::CliConfig,
    observability::{LogFormat, init_observability},
};

/// Compute a prorated monthly subscription charge in cents.
#[derive(Debug, Parser)]
#[command(name = "monthly-charge", version, about)]
struct CommandLine {
    /// JSON charge request (`month`, `subscription`, `users`), or `-` for stdin.
    request: PathBuf,

    /// TOML settings for output and logging.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the itemized breakdown as JSON instead of the total.
    #[arg(short, long)]
    breakdown: bool,

    /// Log format (`pretty` or `json`); defaults to `LOG_FORMAT`.
    #[arg(long)]
    log_format: Option<LogFormat>,
}

fn load_request(path: &Path) -> anyhow::Result<ChargeRequest> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json).context("reading charge request from stdin")?;
        return Ok(ChargeRequest::from_json(&json)?);
    }

    ChargeRequest::from_file(path)
        .with_context(|| format!("loading charge request {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    let config = match &commands.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let format = commands.log_format.or(config.log_format).unwrap_or_else(LogFormat::from_env);
    init_observability(format, config.log_filter.as_deref())?;
    debug!(?config, "settings loaded");

    let request = load_request(&commands.request)?;
    let breakdown = ProrationCalculator::new().breakdown(
        request.month,
        request.subscription.as_ref(),
        &request.users,
    );

    if commands.breakdown || config.breakdown {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", breakdown.total_cents);
    }

    Ok(())
}
