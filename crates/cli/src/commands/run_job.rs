// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk run-job <job> <payload>` - Execute a job launched by `tk run`

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;
use tk_adapters::{SendmailNotifier, TracedNotifyAdapter};
use tk_core::{Clock, JobInvocation, SystemClock, RUN_JOB_ARG};
use tk_engine::{exit_code, JobRunner, Ticker};

#[derive(Args)]
pub struct RunJobArgs {
    /// Job name
    pub job: String,

    /// JSON payload describing the job
    pub payload: String,
}

pub async fn run_job(args: RunJobArgs) -> Result<ExitCode> {
    let argv = [RUN_JOB_ARG.to_string(), args.job, args.payload];
    let invocation =
        JobInvocation::from_args(&argv)?.with_secrets(|key| std::env::var(key).ok());

    let ticker = Ticker::new();
    let runner = JobRunner::new(
        TracedNotifyAdapter::new(SendmailNotifier::new()),
        ticker.host().clone(),
    );
    let result = ticker
        .run_invocation(&invocation, &runner, SystemClock.now())
        .await?;

    tracing::info!(job = %invocation.job, result = %result, "run-job finished");
    Ok(exit_code(&result))
}
