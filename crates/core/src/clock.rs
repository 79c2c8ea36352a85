// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for date eligibility checks

use chrono::NaiveDate;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for schedule eligibility.
///
/// Recurrence math operates on logical calendar dates, so the only clock
/// surface the declaration layer needs is the current UTC date plus an
/// epoch-milliseconds timestamp for log lines.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64;

    /// Current calendar date in UTC.
    fn today_utc(&self) -> NaiveDate;
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn today_utc(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FakeClock {
    epoch_ms: u64,
    today: NaiveDate,
}

impl FakeClock {
    pub fn new(epoch_ms: u64, today: NaiveDate) -> Self {
        Self { epoch_ms, today }
    }

    /// Move the clock to a new date, keeping epoch_ms in step (86_400_000 ms
    /// per whole day of difference, never going backwards).
    pub fn set_today(&mut self, today: NaiveDate) {
        let days = (today - self.today).num_days();
        if days > 0 {
            self.epoch_ms += (days as u64) * 86_400_000;
        }
        self.today = today;
    }
}

impl Clock for FakeClock {
    fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }

    fn today_utc(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
