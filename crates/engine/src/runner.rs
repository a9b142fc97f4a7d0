// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution engine for a single job run
//!
//! One run walks a fixed sequence: runtime ceiling, run gate, lock, task,
//! release. The ceiling looks at the lock left by the *previous* run, before
//! this run tries to take it, so `max_runtime` bounds how long an earlier
//! invocation may hold the job. It never times or kills the current one.

use crate::command;
use crate::gate;
use crate::lock::{self, LockError};
use crate::log::{JobLog, Stream};
use chrono::{DateTime, Local};
use std::process::{ExitStatus, Stdio};
use std::time::SystemTime;
use tk_adapters::{HostInfo, Notification, NotifyAdapter};
use tk_core::{Callable, ExecutionResult, JobSpec, Task};
use tracing::Instrument;

/// Runs jobs in the current process and reports failures
#[derive(Clone)]
pub struct JobRunner<N> {
    notifier: N,
    host: HostInfo,
}

impl<N: NotifyAdapter> JobRunner<N> {
    pub fn new(notifier: N, host: HostInfo) -> Self {
        Self { notifier, host }
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    /// Run `job` once. Every failure is logged and classified; none escape.
    pub async fn run(&self, job: &JobSpec, now: DateTime<Local>) -> ExecutionResult {
        let span = tracing::info_span!("job", job = %job.name, task = job.task.kind());
        async {
            let start = std::time::Instant::now();
            let result = self.run_inner(job, now).await;
            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                result = %result,
                "finished"
            );
            result
        }
        .instrument(span)
        .await
    }

    async fn run_inner(&self, job: &JobSpec, now: DateTime<Local>) -> ExecutionResult {
        let log = JobLog::new(&job.name, &job.config, &now);
        let lock_path = job.lock_path(self.host.temp_dir());

        if let Err(message) = self.check_max_runtime(job, &lock_path, now) {
            return self.fail(job, &log, message).await;
        }

        if let Some(reason) = gate::rejection(&job.name, &job.config, &self.host) {
            tracing::debug!(%reason, "skipped");
            return ExecutionResult::Skipped { reason };
        }

        let handle = match lock::acquire(&lock_path) {
            Ok(handle) => handle,
            Err(e) if e.is_recoverable() => {
                let message = e.to_string();
                log.info(&message);
                return ExecutionResult::FailedRecoverable { message };
            }
            Err(e) => return self.fail(job, &log, e.to_string()).await,
        };

        let outcome = match &job.task {
            Task::Command(line) => self.run_command(job, line, &log).await,
            Task::Callable(callable) => run_callable(callable, &log),
        };
        let mut result = match outcome {
            Ok(()) => ExecutionResult::Succeeded,
            Err(message) => self.fail(job, &log, message).await,
        };

        if let Err(e) = handle.release() {
            result = self.release_failed(job, &log, e, result).await;
        }
        log.remove_if_empty(Stream::Stdout);

        result
    }

    /// Refuse to start while an earlier run has held the lock too long
    fn check_max_runtime(
        &self,
        job: &JobSpec,
        lock_path: &std::path::Path,
        now: DateTime<Local>,
    ) -> Result<(), String> {
        let Some(max) = job.config.max_runtime else {
            return Ok(());
        };
        if !self.host.platform().supports_process_inspection() {
            return Err(format!(
                "\"max_runtime\" is not supported on {}",
                self.host.platform()
            ));
        }

        let runtime = lock::lock_age(lock_path, SystemTime::from(now));
        if runtime < max {
            return Ok(());
        }
        Err(format!(
            "MaxRuntime of {} secs exceeded! Current runtime: {} secs",
            max, runtime
        ))
    }

    async fn run_command(&self, job: &JobSpec, line: &str, log: &JobLog) -> Result<(), String> {
        let (stdout, stderr) = redirects(log);
        let mut cmd = command::build(line, job.config.run_as.as_deref(), &self.host);
        cmd.stdin(Stdio::null()).stdout(stdout).stderr(stderr);

        let status = cmd
            .status()
            .await
            .map_err(|e| format!("Failed to start job: {}", e))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("Job exited with status '{}'.", exit_code(status)))
        }
    }

    /// Log, notify and classify a fatal failure
    async fn fail(&self, job: &JobSpec, log: &JobLog, message: String) -> ExecutionResult {
        tracing::warn!(error = %message, "job failed");
        log.error(&message);

        if let Some(notification) =
            Notification::for_job(&job.name, &job.config, self.host.hostname(), &message)
        {
            if let Err(e) = self.notifier.notify(&notification).await {
                tracing::error!(error = %e, "could not deliver failure notification");
            }
        }

        ExecutionResult::FailedNotified { message }
    }

    async fn release_failed(
        &self,
        job: &JobSpec,
        log: &JobLog,
        error: LockError,
        result: ExecutionResult,
    ) -> ExecutionResult {
        let failure = self.fail(job, log, error.to_string()).await;
        match result {
            ExecutionResult::Succeeded => failure,
            other => other,
        }
    }
}

fn run_callable(callable: &Callable, log: &JobLog) -> Result<(), String> {
    let run = callable.invoke();

    if let Some(fault) = &run.fault {
        log.append(Stream::Stderr, format!("Error! {}\n", fault).as_bytes());
    }
    if !run.output.is_empty() {
        log.append(Stream::Stdout, &run.output);
    }

    if run.succeeded() {
        Ok(())
    } else {
        Err(format!(
            "Task did not return true! Returned: {}",
            run.describe_value()
        ))
    }
}

/// Child stdio for each stream: its log file, or the null device
fn redirects(log: &JobLog) -> (Stdio, Stdio) {
    let stdout = open_or_warn(log, Stream::Stdout);
    let stderr = match (&stdout, log.shared()) {
        (Some(file), true) => file.try_clone().ok(),
        _ => open_or_warn(log, Stream::Stderr),
    };
    (into_stdio(stdout), into_stdio(stderr))
}

fn open_or_warn(log: &JobLog, stream: Stream) -> Option<std::fs::File> {
    match log.open(stream) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(?stream, error = %e, "cannot open job log, discarding output");
            None
        }
    }
}

fn into_stdio(file: Option<std::fs::File>) -> Stdio {
    file.map(Stdio::from).unwrap_or_else(Stdio::null)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
