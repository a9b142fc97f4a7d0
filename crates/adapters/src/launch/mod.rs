// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Detached process launching

mod process;

pub use process::{LaunchMode, ProcessLauncher};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeLauncher;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from launch operations
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch '{job}': {source}")]
    Spawn {
        job: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open debug log {}: {source}", path.display())]
    DebugLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A process to start without waiting for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Job the process runs, for diagnostics
    pub job: String,
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Extra environment for the child, for values that must stay off `ps`
    pub env: Vec<(String, String)>,
    /// Where the child's own stdout and stderr go; the null device if unset
    pub debug_log: Option<PathBuf>,
}

/// Adapter that starts independent background processes
#[async_trait]
pub trait Launcher: Clone + Send + Sync + 'static {
    /// Start the process and return its pid without waiting for it
    async fn launch(&self, request: &LaunchRequest) -> Result<u32, LaunchError>;
}
