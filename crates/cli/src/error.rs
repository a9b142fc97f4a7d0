// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct TkError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        for ctx in &self.context {
            writeln!(f, "  -> {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for TkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl TkError {
    /// The job file could not be read or parsed.
    pub fn jobfile(path: &Path, source: tk_jobfile::ParseError) -> Self {
        let missing = matches!(
            &source,
            tk_jobfile::ParseError::Io { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        );
        let err = TkError::new(format!("Failed to load job file '{}'", path.display()));
        let err = if missing {
            err.with_suggestion(format!(
                "Create {} with a [job.<name>] section",
                tk_jobfile::DEFAULT_JOBFILE
            ))
            .with_suggestion("Point at another file: tk --jobfile <path> ...")
        } else {
            err.with_suggestion(format!("Validate it: tk --jobfile {} check", path.display()))
        };
        err.with_source(source)
    }

    /// A job section failed validation while registering.
    pub fn invalid_job(name: &str, source: tk_core::ConfigError) -> Self {
        TkError::new(format!("Job '{}' is invalid", name)).with_source(source)
    }

    /// No job with this name is registered.
    pub fn unknown_job(name: &str, known: &[&str]) -> Self {
        let err = TkError::new(format!("Job '{}' not found", name));
        let err = if known.is_empty() {
            err.with_context("The job file defines no jobs")
        } else {
            err.with_context(format!("Known jobs: {}", known.join(", ")))
        };
        err.with_suggestion("List jobs: tk list")
    }
}
