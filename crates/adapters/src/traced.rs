// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::launch::{LaunchError, LaunchRequest, Launcher};
use crate::notify::{Notification, NotifyAdapter, NotifyError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any NotifyAdapter
#[derive(Clone)]
pub struct TracedNotifyAdapter<N> {
    inner: N,
}

impl<N> TracedNotifyAdapter<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: NotifyAdapter> NotifyAdapter for TracedNotifyAdapter<N> {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let span = tracing::info_span!(
            "notify",
            job = %notification.job,
            mailer = %notification.mailer
        );

        async {
            tracing::info!(recipients = notification.recipients.len(), "sending");

            let start = std::time::Instant::now();
            let result = self.inner.notify(notification).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => {
                    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "notification sent")
                }
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "notification failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any Launcher
#[derive(Clone)]
pub struct TracedLauncher<L> {
    inner: L,
}

impl<L> TracedLauncher<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<L: Launcher> Launcher for TracedLauncher<L> {
    async fn launch(&self, request: &LaunchRequest) -> Result<u32, LaunchError> {
        let span = tracing::info_span!("launch", job = %request.job);

        async {
            tracing::info!(program = %request.program.display(), "starting");

            let start = std::time::Instant::now();
            let result = self.inner.launch(request).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(pid) => {
                    tracing::info!(pid, elapsed_ms = elapsed.as_millis() as u64, "launched")
                }
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "launch failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
