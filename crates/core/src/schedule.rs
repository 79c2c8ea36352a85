// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recurrence expressions
//!
//! Schedules are coarse calendar tokens; sub-day tick times belong to the
//! external scheduler. All eligibility math is pure and UTC-dated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a recurrence token.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("unknown schedule token: {0}")]
    UnknownToken(String),
}

/// A recognized recurrence token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// One run per calendar day.
    #[serde(rename = "@daily")]
    Daily,
    /// Eligible every day; the scheduler owns the per-hour ticks within it.
    #[serde(rename = "@hourly")]
    Hourly,
    /// One run per week, on the start date's weekday.
    #[serde(rename = "@weekly")]
    Weekly,
}

impl FromStr for Schedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "@daily" => Ok(Schedule::Daily),
            "@hourly" => Ok(Schedule::Hourly),
            "@weekly" => Ok(Schedule::Weekly),
            other => Err(ScheduleError::UnknownToken(other.to_string())),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Daily => write!(f, "@daily"),
            Schedule::Hourly => write!(f, "@hourly"),
            Schedule::Weekly => write!(f, "@weekly"),
        }
    }
}

impl Schedule {
    /// Whether `date` is an eligible logical run date for a workflow that
    /// starts at `start_date`.
    pub fn is_due(&self, date: NaiveDate, start_date: NaiveDate) -> bool {
        if date < start_date {
            return false;
        }
        match self {
            Schedule::Daily | Schedule::Hourly => true,
            Schedule::Weekly => date.weekday() == start_date.weekday(),
        }
    }

    /// Every eligible logical date in `from..=to`, clamped to `start_date`.
    pub fn runs_between(
        &self,
        start_date: NaiveDate,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<NaiveDate> {
        let begin = from.max(start_date);
        if begin > to {
            return Vec::new();
        }
        begin
            .iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_due(*d, start_date))
            .collect()
    }

    /// The first eligible logical date strictly after `date`.
    ///
    /// Returns `None` only at the end of the calendar's representable range.
    pub fn next_after(&self, date: NaiveDate, start_date: NaiveDate) -> Option<NaiveDate> {
        let mut d = date.succ_opt()?;
        if d < start_date {
            d = start_date;
        }
        // A weekly schedule is due within any 7-day window.
        for _ in 0..7 {
            if self.is_due(d, start_date) {
                return Some(d);
            }
            d = d.succ_opt()?;
        }
        None
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
