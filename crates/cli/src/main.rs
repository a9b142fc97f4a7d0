// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk - Ticker cron job runner CLI

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, exec, list, run, run_job};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "tk",
    version,
    about = "Ticker - run many cron jobs from one crontab entry"
)]
struct Cli {
    /// Job file to load
    #[arg(long, global = true, default_value = tk_jobfile::DEFAULT_JOBFILE)]
    jobfile: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch every job due this minute (call from cron every minute)
    Run(run::RunArgs),
    /// Run one job now in the foreground
    Exec(exec::ExecArgs),
    /// List jobs and their schedules
    List(list::ListArgs),
    /// Validate the job file
    Check,
    /// Execute a dispatched job (internal)
    #[command(name = "run-job", hide = true)]
    RunJob(run_job::RunJobArgs),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::run(args, &cli.jobfile).await,
        Commands::Exec(args) => exec::exec(args, &cli.jobfile).await,
        Commands::List(args) => list::list(args, &cli.jobfile),
        Commands::Check => check::check(&cli.jobfile),
        // Payloads are self-contained, so the job file is never read here.
        Commands::RunJob(args) => run_job::run_job(args).await,
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
