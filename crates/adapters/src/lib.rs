// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod host;
pub mod launch;
pub mod notify;
pub mod traced;

pub use host::{application_env, HostInfo};
pub use launch::{LaunchError, LaunchMode, LaunchRequest, Launcher, ProcessLauncher};
pub use notify::{NoOpNotifyAdapter, Notification, NotifyAdapter, NotifyError, SendmailNotifier};
pub use traced::{TracedLauncher, TracedNotifyAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use launch::FakeLauncher;
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifyAdapter;
