// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk-core: Core types for the Ticker (tk) job scheduler
//!
//! This crate provides:
//! - Job specifications, configuration and task payloads
//! - Schedule parsing and the per-tick due check
//! - Run outcomes and the run-job hand-off format
//! - Clock and platform abstractions

pub mod clock;
pub mod config;
pub mod error;
pub mod invocation;
pub mod job;
pub mod outcome;
pub mod platform;
pub mod schedule;
pub mod task;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{JobConfig, Mailer, SmtpSecurity, DEFAULT_DATE_FORMAT};
pub use error::ConfigError;
pub use invocation::{InvocationError, JobInvocation, TaskRef, RUN_JOB_ARG, SMTP_PASSWORD_ENV};
pub use job::{escape, JobSpec};
pub use outcome::{ExecutionResult, SkipReason};
pub use platform::Platform;
pub use schedule::{Schedule, ScheduleGate};
pub use task::{Callable, Task, TaskResult, TaskRun};
