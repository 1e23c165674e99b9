//! fieldform command-line driver
//!
//! Loads a form schema, fills in fields, submits, and prints the outcome
//! as JSON. Exits non-zero when validation fails.
//!
//! Usage:
//!   fieldform --schema login.json --set username=bob --set age:=30

use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use fieldform_cli::{Assignment, load_schema, parse_assignment, run};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fieldform")]
#[command(about = "Fill in and submit a form described by a JSON schema")]
struct Args {
    /// Path to the form schema (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Field input as name=value (text) or name:=number; repeatable, applied in order
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    assignments: Vec<Assignment>,

    /// Enable verbose debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let schema = load_schema(&args.schema)?;
    info!("Schema has {} field(s)", schema.fields.len());

    let report = run(&schema, &args.assignments)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");

    Ok(if report.is_finished() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
