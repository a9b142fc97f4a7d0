// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Ticker execution engine

pub mod command;
mod dispatcher;
mod error;
pub mod gate;
pub mod lock;
pub mod log;
mod runner;
mod ticker;

pub use dispatcher::{DispatchReport, Dispatcher, DEBUG_LOG};
pub use error::EngineError;
pub use lock::{LockError, LockHandle};
pub use runner::JobRunner;
pub use ticker::{exit_code, Ticker};
