// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job run outcomes

use std::fmt;

/// Why a due job did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    /// A halt file named after the job exists
    Halted,
    /// Pinned to another host via `run_on_host`
    OtherHost,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Disabled => write!(f, "disabled"),
            SkipReason::Halted => write!(f, "halted"),
            SkipReason::OtherHost => write!(f, "other host"),
        }
    }
}

/// Outcome of one job run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Skipped { reason: SkipReason },
    Succeeded,
    /// Logged at info level, never notified
    FailedRecoverable { message: String },
    /// Logged at error level and routed to the notifier
    FailedNotified { message: String },
}

impl ExecutionResult {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ExecutionResult::FailedRecoverable { .. } | ExecutionResult::FailedNotified { .. }
        )
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ExecutionResult::FailedRecoverable { message }
            | ExecutionResult::FailedNotified { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionResult::Skipped { reason } => write!(f, "skipped ({})", reason),
            ExecutionResult::Succeeded => write!(f, "succeeded"),
            ExecutionResult::FailedRecoverable { message } => write!(f, "not run: {}", message),
            ExecutionResult::FailedNotified { message } => write!(f, "failed: {}", message),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
