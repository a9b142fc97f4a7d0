// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job file TOML parsing
//!
//! ```toml
//! [defaults]
//! output = "/var/log/tk/all.log"
//!
//! [job.backup]
//! schedule = "0 3 * * *"
//! command = "pg_dump app > /srv/backup.sql"
//! max_runtime = 3600
//! ```

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tk_core::JobConfig;

/// File name looked up when no job file is given
pub const DEFAULT_JOBFILE: &str = "tk.toml";

/// Errors that can occur during job file parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// One `[job.<name>]` table
#[derive(Debug, Clone, PartialEq)]
pub struct JobEntry {
    pub name: String,
    pub schedule: String,
    pub command: String,
    /// Per-job overrides of the defaults
    pub config: JobConfig,
}

/// A parsed job file; jobs are ordered by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Jobfile {
    pub defaults: JobConfig,
    pub jobs: Vec<JobEntry>,
}

/// Parse a job file from TOML content
pub fn parse_jobfile(content: &str) -> Result<Jobfile, ParseError> {
    let mut root: toml::Table = toml::from_str(content)?;
    let mut jobfile = Jobfile::default();

    if let Some(defaults) = root.remove("defaults") {
        jobfile.defaults = convert("defaults", defaults)?;
    }

    if let Some(jobs) = root.remove("job") {
        let toml::Value::Table(jobs) = jobs else {
            return Err(ParseError::InvalidFormat("job must be a table".to_string()));
        };
        for (name, value) in jobs {
            jobfile.jobs.push(parse_job(name, value)?);
        }
    }

    if let Some(key) = root.keys().next() {
        return Err(ParseError::InvalidFormat(format!("unknown section '{}'", key)));
    }

    Ok(jobfile)
}

/// Read and parse the job file at `path`
pub fn load_jobfile(path: &Path) -> Result<Jobfile, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobfile(&content)
}

fn parse_job(name: String, value: toml::Value) -> Result<JobEntry, ParseError> {
    let toml::Value::Table(mut table) = value else {
        return Err(ParseError::InvalidFormat(format!(
            "job.{} must be a table",
            name
        )));
    };

    let schedule = take_string(&mut table, &name, "schedule")?;
    let command = take_string(&mut table, &name, "command")?;
    let config = convert(&format!("job.{}", name), toml::Value::Table(table))?;

    Ok(JobEntry {
        name,
        schedule,
        command,
        config,
    })
}

fn take_string(table: &mut toml::Table, job: &str, key: &str) -> Result<String, ParseError> {
    match table.remove(key) {
        Some(toml::Value::String(s)) => Ok(s),
        Some(_) => Err(ParseError::InvalidFormat(format!(
            "job.{}.{} must be a string",
            job, key
        ))),
        None => Err(ParseError::MissingField(format!("job.{}.{}", job, key))),
    }
}

fn convert<T: DeserializeOwned>(context: &str, value: toml::Value) -> Result<T, ParseError> {
    value
        .try_into()
        .map_err(|e| ParseError::InvalidFormat(format!("{}: {}", context, e)))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
