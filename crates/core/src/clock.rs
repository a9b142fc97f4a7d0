// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! A tick samples the clock once and hands the resulting timestamp to every
//! schedule check and log line produced during that invocation.

use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Local>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    /// Create a clock frozen at the given instant
    pub fn at(instant: DateTime<Local>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Ok(delta) = chrono::Duration::from_std(duration) {
            *current += delta;
        }
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: DateTime<Local>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
