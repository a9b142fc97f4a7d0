// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host platform capabilities

use std::fmt;

/// Operating-system family the engine is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Whether a process can be checked for liveness by pid.
    /// The runtime ceiling depends on it.
    pub fn supports_process_inspection(self) -> bool {
        matches!(self, Platform::Unix)
    }

    /// Whether commands may be prefixed with `sudo -u`
    pub fn supports_user_switch(self) -> bool {
        matches!(self, Platform::Unix)
    }

    /// Shell program and the flag that makes it run one command string
    pub fn shell(self) -> (&'static str, &'static str) {
        match self {
            Platform::Unix => ("sh", "-c"),
            Platform::Windows => ("cmd", "/C"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Unix => write!(f, "unix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
