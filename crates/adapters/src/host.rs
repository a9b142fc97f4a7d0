// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Facts about the machine a tick runs on

use std::path::{Path, PathBuf};
use tk_core::Platform;

/// Environment variable naming the deployment environment
pub const APPLICATION_ENV: &str = "APPLICATION_ENV";

/// Local host identity and capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    hostname: String,
    platform: Platform,
    privileged: bool,
    temp_dir: PathBuf,
}

impl HostInfo {
    /// Probe the running system
    pub fn detect() -> Self {
        let hostname = hostname::get()
            .ok()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "localhost".to_string());

        Self {
            hostname,
            platform: Platform::current(),
            privileged: is_root(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Host with the given name and otherwise unprivileged defaults
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            platform: Platform::current(),
            privileged: false,
            temp_dir: std::env::temp_dir(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether the process runs as root
    pub fn privileged(&self) -> bool {
        self.privileged
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Case-insensitive hostname comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.hostname.eq_ignore_ascii_case(name)
    }
}

/// Deployment environment from `APPLICATION_ENV`, if set and non-blank
pub fn application_env() -> Option<String> {
    std::env::var(APPLICATION_ENV)
        .ok()
        .filter(|env| !env.trim().is_empty())
}

#[cfg(unix)]
fn is_root() -> bool {
    nix::unistd::getuid().is_root()
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
