// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mail transport selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport used to deliver failure notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mailer {
    #[default]
    Sendmail,
    Smtp,
    Mail,
}

impl fmt::Display for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mailer::Sendmail => write!(f, "sendmail"),
            Mailer::Smtp => write!(f, "smtp"),
            Mailer::Mail => write!(f, "mail"),
        }
    }
}

/// Transport security for SMTP connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    Ssl,
    Tls,
}
