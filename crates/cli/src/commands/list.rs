// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk list` - List jobs and their schedules

use super::load_ticker;
use crate::output::{OutputFormat, Table};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use tk_core::{Clock, JobSpec, ScheduleGate, SystemClock};

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One row of `tk list`
#[derive(Debug, Serialize)]
pub struct JobRow {
    pub name: String,
    pub schedule: String,
    pub command: Option<String>,
    pub enabled: bool,
    pub due: bool,
}

impl JobRow {
    fn new(job: &JobSpec, gate: &ScheduleGate) -> Self {
        Self {
            name: job.name.clone(),
            schedule: job.schedule.to_string(),
            command: job.task.command().map(String::from),
            enabled: job.config.enabled(),
            due: gate.is_due(&job.schedule),
        }
    }
}

impl fmt::Display for JobRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match (self.enabled, self.due) {
            (false, _) => "disabled",
            (true, true) => "due",
            (true, false) => "-",
        };
        write!(
            f,
            "{:<20} {:<16} {:<8} {}",
            self.name,
            self.schedule,
            status,
            self.command.as_deref().unwrap_or("<callable>")
        )
    }
}

pub fn list(args: ListArgs, jobfile: &Path) -> Result<ExitCode> {
    let ticker = load_ticker(jobfile)?;
    let gate = ScheduleGate::new(SystemClock.now());
    let rows: Vec<JobRow> = ticker
        .jobs()
        .iter()
        .map(|job| JobRow::new(job, &gate))
        .collect();

    let header = format!("{:<20} {:<16} {:<8} COMMAND", "NAME", "SCHEDULE", "STATUS");
    Table {
        header: &header,
        empty: "No jobs",
        rows: &rows,
    }
    .print(args.format);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
