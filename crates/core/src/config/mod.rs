// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod job;
mod mail;

pub use job::{JobConfig, DEFAULT_DATE_FORMAT};
pub use mail::{Mailer, SmtpSecurity};
