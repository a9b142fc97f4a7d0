// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op notifier for when failure mail is disabled.

use super::{Notification, NotifyAdapter, NotifyError};
use async_trait::async_trait;

/// Notifier that drops every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NoOpNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}
