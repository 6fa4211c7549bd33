//! Strike Planner - Entry Point
//!
//! Loads a fleet document, runs the scheduling pass once, then answers
//! report commands from stdin until `exit`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use strike_planner::app;
use strike_planner::core::config::AppConfig;
use strike_planner::core::error::Result;

/// Schedule unit strikes against a fleet and query the outcome
#[derive(Parser, Debug)]
#[command(name = "strike-planner")]
#[command(about = "Schedule ranged units against hostile ships and report the outcome")]
struct Args {
    /// Fleet document (XML with Troop and Ship elements)
    input: Option<PathBuf>,

    /// Optional TOML config (log_filter, prompt)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Logs go to stderr; stdout carries only report output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let status = app::run(
        args.input.as_deref(),
        config.prompt,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    )?;

    Ok(status.exit_code())
}
