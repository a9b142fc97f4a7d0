// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job log files
//!
//! Every line is stamped with the invocation's fixed `now`, so all lines
//! written by one run carry the same timestamp. Write failures are traced
//! and otherwise ignored; a broken log must not change a job's outcome.

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tk_core::{JobConfig, DEFAULT_DATE_FORMAT};

/// Which of the job's two log streams to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Log targets for one job run
#[derive(Debug, Clone)]
pub struct JobLog {
    job: String,
    stamp: String,
    stdout: Option<PathBuf>,
    stderr: Option<PathBuf>,
}

impl JobLog {
    pub fn new(job: &str, config: &JobConfig, now: &DateTime<Local>) -> Self {
        Self {
            job: job.to_string(),
            stamp: format_stamp(now, config.date_format()),
            stdout: config.stdout_path().map(Path::to_path_buf),
            stderr: config.stderr_path().map(Path::to_path_buf),
        }
    }

    pub fn path(&self, stream: Stream) -> Option<&Path> {
        match stream {
            Stream::Stdout => self.stdout.as_deref(),
            Stream::Stderr => self.stderr.as_deref(),
        }
    }

    /// Whether both streams go to the same file
    pub fn shared(&self) -> bool {
        self.stdout.is_some() && self.stdout == self.stderr
    }

    /// `[<stamp>] [<job>] <message>` with a trailing newline
    pub fn line(&self, message: &str) -> String {
        format!("[{}] [{}] {}\n", self.stamp, self.job, message)
    }

    pub fn error(&self, message: &str) {
        self.append(Stream::Stderr, self.line(&format!("ERROR: {}", message)).as_bytes());
    }

    pub fn info(&self, message: &str) {
        self.append(Stream::Stderr, self.line(&format!("INFO: {}", message)).as_bytes());
    }

    /// Append raw bytes to a stream; a no-op when the stream has no file
    pub fn append(&self, stream: Stream, bytes: &[u8]) {
        let result = match self.open(stream) {
            Ok(Some(mut file)) => file.write_all(bytes),
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!(job = %self.job, ?stream, error = %e, "cannot write job log");
        }
    }

    /// Open a stream for appending, creating parent directories on demand
    pub fn open(&self, stream: Stream) -> io::Result<Option<File>> {
        let Some(path) = self.path(stream) else {
            return Ok(None);
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Some)
    }

    /// Delete the stream's file if it exists and is empty
    pub fn remove_if_empty(&self, stream: Stream) {
        let Some(path) = self.path(stream) else {
            return;
        };
        if let Ok(meta) = fs::metadata(path) {
            if meta.is_file() && meta.len() == 0 {
                if let Err(e) = fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), error = %e, "cannot remove empty log");
                }
            }
        }
    }
}

fn format_stamp(now: &DateTime<Local>, format: &str) -> String {
    let mut stamp = String::new();
    if write!(stamp, "{}", now.format(format)).is_err() {
        stamp.clear();
        let _ = write!(stamp, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    stamp
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
