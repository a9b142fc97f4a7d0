// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Notification, NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Fake notification adapter for testing
#[derive(Clone, Default)]
pub struct FakeNotifyAdapter {
    calls: Arc<Mutex<Vec<Notification>>>,
    fail: Arc<Mutex<bool>>,
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent deliveries fail after recording them
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }
}

#[async_trait]
impl NotifyAdapter for FakeNotifyAdapter {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());

        if *self.fail.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(NotifyError::Failed("injected failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
