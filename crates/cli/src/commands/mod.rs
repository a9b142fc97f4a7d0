// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod exec;
pub mod list;
pub mod run;
pub mod run_job;

use crate::error::TkError;
use std::path::Path;
use tk_engine::Ticker;

/// Build a registry from the job file at `path`
pub fn load_ticker(path: &Path) -> Result<Ticker, TkError> {
    let jobfile = tk_jobfile::load_jobfile(path).map_err(|e| TkError::jobfile(path, e))?;

    let mut ticker = Ticker::new();
    ticker
        .configure(&jobfile.defaults)
        .map_err(|e| TkError::new("Invalid [defaults] section").with_source(e))?;
    for entry in &jobfile.jobs {
        ticker
            .add_command(&entry.name, &entry.schedule, &entry.command, &entry.config)
            .map_err(|e| TkError::invalid_job(&entry.name, e))?;
    }

    tracing::debug!(path = %path.display(), jobs = ticker.jobs().len(), "job file loaded");
    Ok(ticker)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
