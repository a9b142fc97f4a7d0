// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job configuration bag
//!
//! Every option is optional so that a global default layer and per-job
//! overrides can be merged key by key. Accessors apply the documented
//! fallbacks for keys that are still unset after merging.

use super::{Mailer, SmtpSecurity};
use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default timestamp format for job log lines
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options controlling how a single job runs, logs and reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Comma-separated notification recipients
    pub recipients: Option<String>,
    pub mailer: Option<Mailer>,
    /// Runtime ceiling in seconds for the previous run of this job
    pub max_runtime: Option<u64>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_sender: Option<String>,
    pub smtp_sender_name: Option<String>,
    pub smtp_security: Option<SmtpSecurity>,
    /// Run the command as this user (requires root)
    pub run_as: Option<String>,
    /// Deployment environment, used in lock names and mail subjects
    pub environment: Option<String>,
    /// Only run on the host with this name (case-insensitive)
    pub run_on_host: Option<String>,
    pub output: Option<PathBuf>,
    pub output_stdout: Option<PathBuf>,
    pub output_stderr: Option<PathBuf>,
    /// chrono strftime format for log line timestamps
    pub date_format: Option<String>,
    pub enabled: Option<bool>,
    /// Directory of halt files named after jobs
    pub halt_dir: Option<PathBuf>,
    pub debug: Option<bool>,
}

impl JobConfig {
    /// Global defaults applied beneath every job
    pub fn defaults(hostname: &str, environment: Option<String>) -> Self {
        Self {
            mailer: Some(Mailer::Sendmail),
            smtp_port: Some(25),
            smtp_sender: Some(format!("tk@{}", hostname)),
            smtp_sender_name: Some("tk".to_string()),
            environment,
            run_on_host: Some(hostname.to_string()),
            date_format: Some(DEFAULT_DATE_FORMAT.to_string()),
            enabled: Some(true),
            debug: Some(false),
            ..Self::default()
        }
    }

    /// Layer `overrides` on top of `self`; every key set in `overrides` wins
    pub fn merge(&self, overrides: &JobConfig) -> JobConfig {
        JobConfig {
            recipients: pick(&overrides.recipients, &self.recipients),
            mailer: overrides.mailer.or(self.mailer),
            max_runtime: overrides.max_runtime.or(self.max_runtime),
            smtp_host: pick(&overrides.smtp_host, &self.smtp_host),
            smtp_port: overrides.smtp_port.or(self.smtp_port),
            smtp_username: pick(&overrides.smtp_username, &self.smtp_username),
            smtp_password: pick(&overrides.smtp_password, &self.smtp_password),
            smtp_sender: pick(&overrides.smtp_sender, &self.smtp_sender),
            smtp_sender_name: pick(&overrides.smtp_sender_name, &self.smtp_sender_name),
            smtp_security: overrides.smtp_security.or(self.smtp_security),
            run_as: pick(&overrides.run_as, &self.run_as),
            environment: pick(&overrides.environment, &self.environment),
            run_on_host: pick(&overrides.run_on_host, &self.run_on_host),
            output: pick(&overrides.output, &self.output),
            output_stdout: pick(&overrides.output_stdout, &self.output_stdout),
            output_stderr: pick(&overrides.output_stderr, &self.output_stderr),
            date_format: pick(&overrides.date_format, &self.date_format),
            enabled: overrides.enabled.or(self.enabled),
            halt_dir: pick(&overrides.halt_dir, &self.halt_dir),
            debug: overrides.debug.or(self.debug),
        }
    }

    /// Fill unset per-stream outputs from `output`
    pub fn with_resolved_outputs(mut self) -> Self {
        if self.output_stdout.is_none() {
            self.output_stdout = self.output.clone();
        }
        if self.output_stderr.is_none() {
            self.output_stderr = self.output.clone();
        }
        self
    }

    /// Reject option values that would only fail once the job runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.date_format {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::InvalidDateFormat(format.clone()));
            }
        }
        if self.max_runtime == Some(0) {
            return Err(ConfigError::InvalidMaxRuntime);
        }
        Ok(())
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn mailer(&self) -> Mailer {
        self.mailer.unwrap_or_default()
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Non-empty environment name, if any
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref().filter(|env| !env.trim().is_empty())
    }

    pub fn stdout_path(&self) -> Option<&Path> {
        self.output_stdout.as_deref()
    }

    pub fn stderr_path(&self) -> Option<&Path> {
        self.output_stderr.as_deref()
    }

    /// Recipients split on commas, blanks removed
    pub fn recipient_list(&self) -> Vec<String> {
        self.recipients
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect()
    }
}

fn pick<T: Clone>(preferred: &Option<T>, fallback: &Option<T>) -> Option<T> {
    preferred.clone().or_else(|| fallback.clone())
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
