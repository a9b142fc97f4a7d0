// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk exec <job>` - Run one job now in the foreground

use super::load_ticker;
use crate::error::TkError;
use anyhow::Result;
use clap::Args;
use std::path::Path;
use std::process::ExitCode;
use tk_adapters::{NoOpNotifyAdapter, NotifyAdapter, SendmailNotifier, TracedNotifyAdapter};
use tk_core::{Clock, ExecutionResult, SystemClock};
use tk_engine::{JobRunner, Ticker};

#[derive(Args)]
pub struct ExecArgs {
    /// Job to run
    pub job: String,

    /// Do not send failure notifications
    #[arg(long)]
    pub no_notify: bool,
}

/// Runs the job through the same gate, lock and log path as a dispatched
/// run. Only the schedule is ignored.
pub async fn exec(args: ExecArgs, jobfile: &Path) -> Result<ExitCode> {
    let ticker = load_ticker(jobfile)?;
    if ticker.job(&args.job).is_none() {
        let known: Vec<&str> = ticker.jobs().iter().map(|job| job.name.as_str()).collect();
        return Err(TkError::unknown_job(&args.job, &known).into());
    }

    let result = if args.no_notify {
        exec_with(&ticker, &args.job, NoOpNotifyAdapter::new()).await?
    } else {
        exec_with(
            &ticker,
            &args.job,
            TracedNotifyAdapter::new(SendmailNotifier::new()),
        )
        .await?
    };

    println!("{}: {}", args.job, result);
    Ok(if result.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn exec_with<N: NotifyAdapter>(
    ticker: &Ticker,
    job: &str,
    notifier: N,
) -> Result<ExecutionResult> {
    let runner = JobRunner::new(notifier, ticker.host().clone());
    Ok(ticker.exec(job, &runner, SystemClock.now()).await?)
}
