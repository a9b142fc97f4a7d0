// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tick dispatch of due jobs into detached runner processes
//!
//! The dispatcher only decides what is due. Gating and locking happen in the
//! launched runner, so a slow job never holds up its siblings.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use tk_adapters::{LaunchRequest, Launcher};
use tk_core::{JobInvocation, JobSpec, ScheduleGate};

/// File that receives a runner's own output when `debug` is on
pub const DEBUG_LOG: &str = "debug.log";

/// What happened to each due job in one tick
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// `(job, pid)` for every runner started
    pub launched: Vec<(String, u32)>,
    /// `(job, error)` for every runner that could not be started
    pub failed: Vec<(String, String)>,
}

impl DispatchReport {
    pub fn is_empty(&self) -> bool {
        self.launched.is_empty() && self.failed.is_empty()
    }
}

/// Launches `<program> run-job <name> <payload>` for each due job
#[derive(Clone)]
pub struct Dispatcher<L> {
    launcher: L,
    program: PathBuf,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(launcher: L, program: impl Into<PathBuf>) -> Self {
        Self {
            launcher,
            program: program.into(),
        }
    }

    /// Launch every job due at `now`. All jobs are checked against the same
    /// `now`; a failure to launch one job does not affect the rest.
    pub async fn dispatch(&self, jobs: &[JobSpec], now: DateTime<Local>) -> DispatchReport {
        let gate = ScheduleGate::new(now);
        let mut report = DispatchReport::default();

        for job in jobs.iter().filter(|job| gate.is_due(&job.schedule)) {
            match self.launch(job).await {
                Ok(pid) => report.launched.push((job.name.clone(), pid)),
                Err(e) => {
                    tracing::error!(job = %job.name, error = %e, "dispatch failed");
                    report.failed.push((job.name.clone(), e));
                }
            }
        }

        tracing::debug!(
            due = report.launched.len() + report.failed.len(),
            total = jobs.len(),
            "tick dispatched"
        );
        report
    }

    async fn launch(&self, job: &JobSpec) -> Result<u32, String> {
        let args = JobInvocation::for_job(job)
            .to_args()
            .map_err(|e| e.to_string())?;
        let request = LaunchRequest {
            job: job.name.clone(),
            program: self.program.clone(),
            args,
            env: JobInvocation::secret_env(job),
            debug_log: job.config.debug().then(|| PathBuf::from(DEBUG_LOG)),
        };
        self.launcher
            .launch(&request)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
