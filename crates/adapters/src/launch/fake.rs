// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake launcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LaunchError, LaunchRequest, Launcher};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeLauncherState {
    calls: Vec<LaunchRequest>,
    failing: HashSet<String>,
}

/// Fake launcher that records requests instead of spawning
#[derive(Clone, Default)]
pub struct FakeLauncher {
    inner: Arc<Mutex<FakeLauncherState>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded launch requests
    pub fn calls(&self) -> Vec<LaunchRequest> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Fail every launch for the named job
    pub fn fail_job(&self, job: &str) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failing
            .insert(job.to_string());
    }
}

#[async_trait]
impl Launcher for FakeLauncher {
    async fn launch(&self, request: &LaunchRequest) -> Result<u32, LaunchError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(request.clone());

        if inner.failing.contains(&request.job) {
            return Err(LaunchError::Spawn {
                job: request.job.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "injected failure"),
            });
        }
        Ok(1000 + inner.calls.len() as u32)
    }
}
