// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job specifications
//!
//! A `JobSpec` is immutable once built: the schedule is parsed, the task
//! payload is fixed and the configuration has its per-stream outputs
//! resolved.

use crate::config::JobConfig;
use crate::error::ConfigError;
use crate::schedule::Schedule;
use crate::task::Task;
use std::path::{Path, PathBuf};

/// A fully resolved, registered job
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub name: String,
    pub schedule: Schedule,
    pub task: Task,
    pub config: JobConfig,
}

impl JobSpec {
    /// Build a job from its merged configuration
    pub fn new(
        name: impl Into<String>,
        schedule: &str,
        task: Task,
        config: JobConfig,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if schedule.trim().is_empty() {
            return Err(ConfigError::MissingSchedule(name));
        }
        let schedule = schedule.parse()?;
        config.validate()?;

        Ok(Self {
            name,
            schedule,
            task,
            config: config.with_resolved_outputs(),
        })
    }

    /// File name of this job's lock: `{environment-}{job}.lck`
    pub fn lock_file_name(&self) -> String {
        let job = escape(&self.name);
        match self.config.environment() {
            Some(env) => format!("{}-{}.lck", escape(env), job),
            None => format!("{}.lck", job),
        }
    }

    pub fn lock_path(&self, temp_dir: &Path) -> PathBuf {
        temp_dir.join(self.lock_file_name())
    }
}

/// Reduce a name to characters that are safe in a file name.
///
/// Lowercases, drops anything outside `[a-z0-9_. -]`, trims, turns spaces
/// into underscores and collapses repeated underscores.
pub fn escape(input: &str) -> String {
    let kept: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_. -".contains(*c))
        .collect();

    let mut out = String::with_capacity(kept.len());
    for c in kept.trim().chars() {
        let c = if c == ' ' { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
