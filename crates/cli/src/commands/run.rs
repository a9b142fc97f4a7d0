// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk run` - Launch every job due this minute

use super::load_ticker;
use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use std::process::ExitCode;
use tk_adapters::{ProcessLauncher, TracedLauncher};
use tk_core::{Clock, SystemClock};
use tk_engine::Dispatcher;

#[derive(Args)]
pub struct RunArgs {
    /// Print the jobs that are due without launching them
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: RunArgs, jobfile: &Path) -> Result<ExitCode> {
    let ticker = load_ticker(jobfile)?;
    let now = SystemClock.now();

    if args.dry_run {
        for job in ticker.due_jobs(now) {
            println!("{}", job.name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let program = std::env::current_exe().context("cannot locate the tk executable")?;
    let dispatcher = Dispatcher::new(TracedLauncher::new(ProcessLauncher::new()), program);
    let report = ticker.tick(&dispatcher, now).await;

    for (job, error) in &report.failed {
        eprintln!("tk: failed to launch '{}': {}", job, error);
    }
    Ok(if report.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
