// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler contract helpers
//!
//! Pure decision functions encoding what a declared policy means to the
//! external scheduler: when a run is blocked on its predecessor, when a
//! failed attempt is retried, and who gets notified. Nothing here executes
//! runs or sends mail; the scheduler owns all of that.

use crate::policy::ExecutionPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Status of one scheduled run, as reported back by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
    Running,
    /// Withheld because the prior scheduled run did not succeed.
    UpstreamBlocked,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Failed => write!(f, "failed"),
            RunStatus::Running => write!(f, "running"),
            RunStatus::UpstreamBlocked => write!(f, "upstream_blocked"),
        }
    }
}

/// A notifiable lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEvent {
    /// An execution reported non-success.
    Failure,
    /// A failed execution is being attempted again.
    Retry,
}

/// Whether a scheduled run may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Blocked,
}

/// What happens after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Try again after waiting out the configured delay.
    Retry { after: Duration },
    /// Retry budget spent; the run is marked failed.
    Exhausted,
}

/// One email the scheduler owes for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub to: String,
    pub event: RunEvent,
}

/// Apply the dependency rule to a run given its predecessor's status.
///
/// The first scheduled run has no predecessor and always proceeds; gating
/// only withholds runs after a non-success.
pub fn dependency_gate(policy: &ExecutionPolicy, prior: Option<RunStatus>) -> GateDecision {
    if !policy.depends_on_past {
        return GateDecision::Proceed;
    }
    match prior {
        None | Some(RunStatus::Success) => GateDecision::Proceed,
        Some(_) => GateDecision::Blocked,
    }
}

/// Decide the next step after a failed attempt, given how many retries have
/// already been consumed.
pub fn retry_decision(policy: &ExecutionPolicy, attempts_so_far: u32) -> RetryDecision {
    if policy.should_retry(attempts_so_far) {
        RetryDecision::Retry {
            after: policy.retry_delay,
        }
    } else {
        RetryDecision::Exhausted
    }
}

/// The notifications owed for one event: exactly one per configured
/// address when the matching flag is on, none otherwise.
pub fn notifications(policy: &ExecutionPolicy, event: RunEvent) -> Vec<Notification> {
    policy
        .notify_on(event)
        .iter()
        .map(|to| Notification {
            to: to.clone(),
            event,
        })
        .collect()
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
