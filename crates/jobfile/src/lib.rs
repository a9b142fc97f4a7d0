// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Job file parsing

mod parser;

pub use parser::{load_jobfile, parse_jobfile, JobEntry, Jobfile, ParseError, DEFAULT_JOBFILE};
