// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule expressions and the per-tick due check
//!
//! Accepted forms:
//! - five-field cron (`min hour dom mon dow`, Sunday is 0 or 7)
//! - six fields: the five above plus a year
//! - `@hourly`, `@daily`, `@weekly`, `@monthly`, `@yearly` and friends
//! - a one-shot `YYYY-MM-DD HH:MM` timestamp
//!
//! Schedules are evaluated at minute granularity. When both day-of-month and
//! day-of-week are restricted, a day matching either one is due, as in
//! standard cron.

use crate::error::ConfigError;
use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

const AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A parsed schedule expression
#[derive(Debug, Clone)]
pub struct Schedule {
    expr: String,
    kind: ScheduleKind,
}

#[derive(Debug, Clone)]
enum ScheduleKind {
    /// Due when any of these matches
    Cron(Vec<cron::Schedule>),
    At(NaiveDateTime),
}

impl Schedule {
    /// The expression as written
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Whether the schedule fires during the minute containing `now`
    pub fn is_due(&self, now: &DateTime<Local>) -> bool {
        let Some(minute) = start_of_minute(now) else {
            return false;
        };
        match &self.kind {
            ScheduleKind::At(at) => minute.naive_local() == *at,
            ScheduleKind::Cron(schedules) => {
                let just_before = minute - chrono::Duration::seconds(1);
                schedules
                    .iter()
                    .any(|schedule| schedule.after(&just_before).next() == Some(minute))
            }
        }
    }
}

impl FromStr for Schedule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim();
        if expr.is_empty() {
            return Err(invalid(s, "expression is empty"));
        }

        if let Ok(at) = NaiveDateTime::parse_from_str(expr, AT_FORMAT) {
            return Ok(Self {
                expr: expr.to_string(),
                kind: ScheduleKind::At(at),
            });
        }

        let schedules = normalize_cron(expr)?
            .iter()
            .map(|normalized| {
                cron::Schedule::from_str(normalized).map_err(|e| invalid(expr, &e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            expr: expr.to_string(),
            kind: ScheduleKind::Cron(schedules),
        })
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// Evaluates schedules against one `now` snapshot shared by a whole tick
#[derive(Debug, Clone, Copy)]
pub struct ScheduleGate {
    now: DateTime<Local>,
}

impl ScheduleGate {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    pub fn is_due(&self, schedule: &Schedule) -> bool {
        schedule.is_due(&self.now)
    }
}

fn start_of_minute(now: &DateTime<Local>) -> Option<DateTime<Local>> {
    now.with_second(0)?.with_nanosecond(0)
}

fn invalid(expr: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidSchedule {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}

/// Rewrite a classic cron expression into the seconds-first dialect of the
/// `cron` crate, whose weekdays run 1 (Sunday) to 7 (Saturday).
///
/// The `cron` crate requires both day fields to match. Standard cron accepts
/// either one when both are restricted, so that case yields two expressions:
/// one per day field, with the other day field opened up.
fn normalize_cron(expr: &str) -> Result<Vec<String>, ConfigError> {
    if expr.starts_with('@') {
        return Ok(vec![expr.to_string()]);
    }

    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != 5 && fields.len() != 6 {
        return Err(invalid(
            expr,
            &format!("expected 5 or 6 fields, found {}", fields.len()),
        ));
    }

    let dow = translate_day_of_week(fields[4]).map_err(|reason| invalid(expr, &reason))?;
    let line = |dom: &str, dow: &str| {
        let mut out = vec!["0", fields[0], fields[1], dom, fields[3], dow];
        if let Some(&year) = fields.get(5) {
            out.push(year);
        }
        out.join(" ")
    };

    if is_restricted(fields[2]) && is_restricted(fields[4]) {
        Ok(vec![line(fields[2], "*"), line("*", &dow)])
    } else {
        Ok(vec![line(fields[2], &dow)])
    }
}

/// A day field starting with `*` (including `*/n`) or `?` leaves the other
/// day field in charge.
fn is_restricted(field: &str) -> bool {
    !field.starts_with('*') && field != "?"
}

fn translate_day_of_week(field: &str) -> Result<String, String> {
    let mut parts = Vec::new();
    for part in field.split(',') {
        let (range, step) = match part.split_once('/') {
            Some((range, step)) => (range, Some(step)),
            None => (part, None),
        };
        let suffix = step.map(|s| format!("/{}", s)).unwrap_or_default();

        match range.split_once('-') {
            Some((start, end)) => match (weekday(start)?, weekday(end)?) {
                (Some(start), Some(end)) if start > end => {
                    return Err(format!("weekday range '{}' runs backwards", part));
                }
                // Sunday written as 7 lands on day 1 of the target dialect.
                (Some(start), Some(7)) => {
                    if start > 0 && step.is_some() {
                        return Err(format!("unsupported weekday range '{}'", part));
                    }
                    parts.push(format!("{}-7{}", start + 1, suffix));
                    if start > 0 {
                        parts.push("1".to_string());
                    }
                }
                (Some(start), Some(end)) => {
                    parts.push(format!("{}-{}{}", start + 1, end + 1, suffix));
                }
                _ => parts.push(part.to_string()),
            },
            None => match weekday(range)? {
                Some(day) => parts.push(format!("{}{}", day % 7 + 1, suffix)),
                None => parts.push(part.to_string()),
            },
        }
    }
    Ok(parts.join(","))
}

const WEEKDAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Parse a weekday number (0-7, Sunday = 0 or 7) or three-letter name.
/// Wildcards and unknown names yield `None` and are left to the `cron` crate.
fn weekday(token: &str) -> Result<Option<u8>, String> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(WEEKDAY_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|day| day as u8));
    }
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    match token.parse::<u8>() {
        Ok(day) if day <= 7 => Ok(Some(day)),
        _ => Err(format!("weekday '{}' out of range", token)),
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
