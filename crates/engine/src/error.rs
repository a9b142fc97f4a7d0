// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use thiserror::Error;
use tk_core::{ConfigError, InvocationError};

/// Errors raised while registering or resolving jobs.
///
/// Failures of a job run are never errors; they are reported as an
/// `ExecutionResult`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Invocation(#[from] InvocationError),
    #[error("unknown job: {0}")]
    UnknownJob(String),
    #[error("job '{0}' has no callable registered in this process")]
    CallableNotRegistered(String),
    #[error("cannot locate the current executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("cannot start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
