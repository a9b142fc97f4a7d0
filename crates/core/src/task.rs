// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task payloads: what a job actually executes
//!
//! A job runs exactly one of an external command line or an in-process
//! callable. The choice is fixed when the job is registered.

use crate::error::ConfigError;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Result returned by an in-process task.
///
/// Only `Ok(Value::Bool(true))` counts as success.
pub type TaskResult = Result<Value, Box<dyn std::error::Error + Send + Sync>>;

type TaskFn = dyn Fn(&mut dyn Write) -> TaskResult + Send + Sync;

/// An in-process task body. Output written to the provided writer is
/// captured and appended to the job's stdout log.
#[derive(Clone)]
pub struct Callable(Arc<TaskFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write) -> TaskResult + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the task, capturing its output and converting errors and panics
    /// into a fault message
    pub fn invoke(&self) -> TaskRun {
        let mut output = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.0)(&mut output)));

        let fault = match result {
            Ok(Ok(value)) => {
                return TaskRun {
                    value,
                    output,
                    fault: None,
                }
            }
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        TaskRun {
            value: Value::String(fault.clone()),
            output,
            fault: Some(fault),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// Outcome of one callable invocation
#[derive(Debug, Clone)]
pub struct TaskRun {
    /// Value the task returned, or the fault message if it failed
    pub value: Value,
    /// Everything the task wrote to its output
    pub output: Vec<u8>,
    pub fault: Option<String>,
}

impl TaskRun {
    pub fn succeeded(&self) -> bool {
        self.fault.is_none() && self.value == Value::Bool(true)
    }

    /// Human-readable rendering of the returned value
    pub fn describe_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The unit of work a job executes
#[derive(Debug, Clone)]
pub enum Task {
    /// Shell command line
    Command(String),
    Callable(Callable),
}

impl Task {
    /// Build a task from optional parts, requiring exactly one of them
    pub fn from_parts(
        job: &str,
        command: Option<String>,
        callable: Option<Callable>,
    ) -> Result<Self, ConfigError> {
        let command = command.filter(|c| !c.trim().is_empty());
        match (command, callable) {
            (Some(command), None) => Ok(Task::Command(command)),
            (None, Some(callable)) => Ok(Task::Callable(callable)),
            _ => Err(ConfigError::TaskConflict(job.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Task::Command(_) => "command",
            Task::Callable(_) => "callable",
        }
    }

    pub fn command(&self) -> Option<&str> {
        match self {
            Task::Command(command) => Some(command),
            Task::Callable(_) => None,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
