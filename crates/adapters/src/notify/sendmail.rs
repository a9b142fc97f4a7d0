// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local sendmail notifier

use super::{Notification, NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tk_core::Mailer;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Pipes notifications into a sendmail-compatible program.
///
/// Handles the `sendmail` and `mail` mailers. SMTP delivery is left to
/// other transports.
#[derive(Clone, Debug)]
pub struct SendmailNotifier {
    program: PathBuf,
    args: Vec<String>,
}

impl SendmailNotifier {
    pub fn new() -> Self {
        Self::with_command("sendmail", ["-t", "-i"])
    }

    /// Use a different program; it receives the full message on stdin
    pub fn with_command<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the RFC 5322 message handed to the transport
    pub fn build_message(notification: &Notification) -> String {
        format!(
            "From: \"{}\" <{}>\nSender: {}\nTo: {}\nSubject: {}\nContent-Type: text/plain; charset=utf-8\n\n{}",
            notification.sender_name,
            notification.sender,
            notification.sender,
            notification.recipients.join(", "),
            notification.subject,
            notification.body,
        )
    }
}

impl Default for SendmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifyAdapter for SendmailNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if notification.mailer == Mailer::Smtp {
            return Err(NotifyError::Unsupported(Mailer::Smtp));
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(Self::build_message(notification).as_bytes())
                .await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::Failed(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "sendmail_tests.rs"]
mod tests;
