// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Rows rendered as a text table or a JSON array
pub struct Table<'a, T> {
    /// Column header line for text output
    pub header: &'a str,
    /// Line printed instead of the table when there are no rows
    pub empty: &'a str,
    pub rows: &'a [T],
}

impl<T: Serialize + Display> Table<'_, T> {
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text if self.rows.is_empty() => format!("{}\n", self.empty),
            OutputFormat::Text => {
                let mut out = format!("{}\n", self.header);
                for row in self.rows {
                    out.push_str(&format!("{}\n", row));
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(self.rows)
                .map(|json| format!("{}\n", json))
                .unwrap_or_default(),
        }
    }

    pub fn print(&self, format: OutputFormat) {
        print!("{}", self.render(format));
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
