// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure notification adapters

mod noop;
mod sendmail;

pub use noop::NoOpNotifyAdapter;
pub use sendmail::SendmailNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifyAdapter;

use async_trait::async_trait;
use thiserror::Error;
use tk_core::{JobConfig, Mailer};

/// Errors from notification operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mailer '{0}' is not supported by this notifier")]
    Unsupported(Mailer),
    #[error("failed to start mail transport: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("mail transport failed: {0}")]
    Failed(String),
}

/// A failure report for one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub job: String,
    pub mailer: Mailer,
    pub recipients: Vec<String>,
    pub sender: String,
    pub sender_name: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// Compose the report for `job`, or `None` when nobody is listening
    pub fn for_job(job: &str, config: &JobConfig, host: &str, message: &str) -> Option<Self> {
        let recipients = config.recipient_list();
        if recipients.is_empty() {
            return None;
        }

        let subject = match config.environment() {
            Some(env) => format!("[{}] [{}] '{}' needs some attention!", host, env, job),
            None => format!("[{}] '{}' needs some attention!", host, job),
        };

        let mut body = format!("{}\n\n", message);
        if let Some(output) = config.output.as_deref().or(config.stdout_path()) {
            body.push_str(&format!(
                "You can find its output in {} on {}.\n\n",
                output.display(),
                host
            ));
        }
        body.push_str(&format!("Best,\ntk@{}\n", host));

        Some(Self {
            job: job.to_string(),
            mailer: config.mailer(),
            recipients,
            sender: config
                .smtp_sender
                .clone()
                .unwrap_or_else(|| format!("tk@{}", host)),
            sender_name: config
                .smtp_sender_name
                .clone()
                .unwrap_or_else(|| "tk".to_string()),
            subject,
            body,
        })
    }
}

/// Adapter for delivering failure notifications
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
