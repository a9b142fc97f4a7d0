// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tk check` - Validate the job file

use super::load_ticker;
use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

pub fn check(jobfile: &Path) -> Result<ExitCode> {
    let ticker = load_ticker(jobfile)?;
    let count = ticker.jobs().len();
    println!(
        "{}: ok ({} job{})",
        jobfile.display(),
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(ExitCode::SUCCESS)
}
