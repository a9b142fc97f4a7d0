// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run gate: may a due job start on this host right now?
//!
//! Checks are read-only and run before the lock is touched.

use tk_adapters::HostInfo;
use tk_core::{JobConfig, SkipReason};

/// First reason the job must not start, checked in order: enabled flag,
/// halt file, host affinity
pub fn rejection(job: &str, config: &JobConfig, host: &HostInfo) -> Option<SkipReason> {
    if !config.enabled() {
        return Some(SkipReason::Disabled);
    }

    if let Some(halt_dir) = &config.halt_dir {
        if halt_dir.join(job).exists() {
            return Some(SkipReason::Halted);
        }
    }

    match config.run_on_host.as_deref() {
        Some(wanted) if !host.is_named(wanted) => Some(SkipReason::OtherHost),
        _ => None,
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
