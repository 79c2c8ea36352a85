// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution policy applied to scheduled work items

use crate::contract::RunEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default configuration every work item in a workflow inherits.
///
/// The external scheduler consults this record for dependency gating,
/// retry cadence, and notification fan-out. The declaration itself never
/// executes any of it.
///
/// `start_date` is fixed at construction; there is no mutator for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPolicy {
    /// Owner identity, informational for the scheduler's status views.
    pub owner: String,
    /// When set, a scheduled run may proceed only if the prior scheduled
    /// run succeeded.
    #[serde(default)]
    pub depends_on_past: bool,
    /// Earliest calendar date from which scheduled runs are eligible.
    pub start_date: NaiveDate,
    /// Notification addresses.
    #[serde(default)]
    pub email: Vec<String>,
    /// Notify on execution failure.
    #[serde(default)]
    pub email_on_failure: bool,
    /// Notify on each retry attempt.
    #[serde(default)]
    pub email_on_retry: bool,
    /// Maximum retry count after a failed execution.
    #[serde(default)]
    pub retries: u32,
    /// Delay waited before each retry, e.g. "30m".
    #[serde(default, with = "crate::duration::serde_str")]
    pub retry_delay: Duration,
}

impl ExecutionPolicy {
    /// Create a policy with conservative defaults: no dependency gating,
    /// no retries, no notifications.
    pub fn new(owner: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            owner: owner.into(),
            depends_on_past: false,
            start_date,
            email: Vec::new(),
            email_on_failure: false,
            email_on_retry: false,
            retries: 0,
            retry_delay: Duration::ZERO,
        }
    }

    /// Gate each run on the prior scheduled run having succeeded.
    pub fn with_depends_on_past(mut self, depends: bool) -> Self {
        self.depends_on_past = depends;
        self
    }

    /// Add a notification address.
    pub fn with_email(mut self, address: impl Into<String>) -> Self {
        self.email.push(address.into());
        self
    }

    pub fn with_email_on_failure(mut self, on: bool) -> Self {
        self.email_on_failure = on;
        self
    }

    pub fn with_email_on_retry(mut self, on: bool) -> Self {
        self.email_on_retry = on;
        self
    }

    /// Set the retry budget and the delay waited before each retry.
    pub fn with_retries(mut self, retries: u32, retry_delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Whether another retry is allowed after `attempts_so_far` retries
    /// have already been consumed.
    pub fn should_retry(&self, attempts_so_far: u32) -> bool {
        attempts_so_far < self.retries
    }

    /// Addresses to notify for an event, honoring the per-event flags.
    pub fn notify_on(&self, event: RunEvent) -> &[String] {
        let enabled = match event {
            RunEvent::Failure => self.email_on_failure,
            RunEvent::Retry => self.email_on_retry,
        };
        if enabled {
            &self.email
        } else {
            &[]
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
