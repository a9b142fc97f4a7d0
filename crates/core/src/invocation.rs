// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-off between a dispatching tick and the detached job runner
//!
//! A due job is launched as `<exe> run-job <name> <json>`, where the JSON is
//! a serialized [`JobInvocation`]. Callables cannot cross the process
//! boundary, so they travel as a marker and are looked up by job name in the
//! child's own registry. Secrets stay out of the payload, since arguments are
//! visible to every user through `ps`; they are passed in the runner's
//! environment instead (see [`JobInvocation::secret_env`]).

use crate::config::JobConfig;
use crate::job::JobSpec;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sub-command that marks a process as a detached job runner
pub const RUN_JOB_ARG: &str = "run-job";

/// Environment variable that carries the SMTP password to a runner
pub const SMTP_PASSWORD_ENV: &str = "TK_SMTP_PASSWORD";

/// Reference to the payload a runner must execute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskRef {
    Command { command: String },
    Callable,
}

/// Everything a runner process needs to execute one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInvocation {
    pub job: String,
    pub schedule: String,
    pub task: TaskRef,
    pub config: JobConfig,
}

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("expected '{RUN_JOB_ARG} <job> <payload>' arguments")]
    MissingArgs,
    #[error("payload is for job '{payload}', not '{requested}'")]
    NameMismatch { requested: String, payload: String },
    #[error("malformed job payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl JobInvocation {
    /// Payload for a job's runner, with secrets removed
    pub fn for_job(job: &JobSpec) -> Self {
        let task = match &job.task {
            Task::Command(command) => TaskRef::Command {
                command: command.clone(),
            },
            Task::Callable(_) => TaskRef::Callable,
        };
        Self {
            job: job.name.clone(),
            schedule: job.schedule.expr().to_string(),
            task,
            config: JobConfig {
                smtp_password: None,
                ..job.config.clone()
            },
        }
    }

    /// Environment variables that hand a job's secrets to its runner
    pub fn secret_env(job: &JobSpec) -> Vec<(String, String)> {
        job.config
            .smtp_password
            .iter()
            .map(|password| (SMTP_PASSWORD_ENV.to_string(), password.clone()))
            .collect()
    }

    /// Restore secrets stripped by [`JobInvocation::for_job`]
    pub fn with_secrets(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.config.smtp_password.is_none() {
            self.config.smtp_password = lookup(SMTP_PASSWORD_ENV);
        }
        self
    }

    /// Arguments for the runner process, excluding the executable
    pub fn to_args(&self) -> Result<Vec<String>, InvocationError> {
        Ok(vec![
            RUN_JOB_ARG.to_string(),
            self.job.clone(),
            serde_json::to_string(self)?,
        ])
    }

    /// Parse the arguments that follow the executable name
    pub fn from_args(args: &[String]) -> Result<Self, InvocationError> {
        let [flag, job, payload, ..] = args else {
            return Err(InvocationError::MissingArgs);
        };
        if flag != RUN_JOB_ARG {
            return Err(InvocationError::MissingArgs);
        }

        let invocation: JobInvocation = serde_json::from_str(payload)?;
        if &invocation.job != job {
            return Err(InvocationError::NameMismatch {
                requested: job.clone(),
                payload: invocation.job,
            });
        }
        Ok(invocation)
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
