// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors raised while registering jobs

use thiserror::Error;

/// Errors detected when a job is constructed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("job name must not be empty")]
    EmptyName,
    #[error("'schedule' is required for '{0}' job")]
    MissingSchedule(String),
    #[error("invalid schedule '{expr}': {reason}")]
    InvalidSchedule { expr: String, reason: String },
    #[error("Either 'command' or a callable is required for '{0}' job")]
    TaskConflict(String),
    #[error("job '{0}' is already registered")]
    DuplicateJob(String),
    #[error("job '{job}' would share lock file '{lock}' with job '{existing}'")]
    LockCollision {
        job: String,
        existing: String,
        lock: String,
    },
    #[error("invalid date_format '{0}'")]
    InvalidDateFormat(String),
    #[error("max_runtime must be at least one second")]
    InvalidMaxRuntime,
}
