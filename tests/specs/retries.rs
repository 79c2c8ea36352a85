// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry cadence and notification fan-out for the declared policy.

use crate::prelude::*;
use airlift_core::{notifications, retry_decision, RetryDecision, RunEvent};
use std::time::Duration;

#[test]
fn failed_execution_is_retried_at_most_three_times() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);

    let mut attempts = 0;
    while let RetryDecision::Retry { after } = retry_decision(policy, attempts) {
        assert!(after >= Duration::from_secs(30 * 60));
        attempts += 1;
    }
    assert_eq!(attempts, 3);
    assert_eq!(retry_decision(policy, attempts), RetryDecision::Exhausted);
}

#[test]
fn every_failure_notifies_the_owner_exactly_once() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    let notes = notifications(policy, RunEvent::Failure);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].to, OWNER);
}

#[test]
fn every_retry_notifies_the_owner_exactly_once() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    let notes = notifications(policy, RunEvent::Retry);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].to, OWNER);
    assert_eq!(notes[0].event, RunEvent::Retry);
}

#[test]
fn a_full_failure_cycle_produces_one_notification_per_event() {
    // A run that fails, retries 3 times, and fails each attempt yields
    // 4 failure events and 3 retry events, one email each.
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);

    let mut emails = 0;
    let mut attempts = 0;
    loop {
        emails += notifications(policy, RunEvent::Failure).len();
        match retry_decision(policy, attempts) {
            RetryDecision::Retry { .. } => {
                emails += notifications(policy, RunEvent::Retry).len();
                attempts += 1;
            }
            RetryDecision::Exhausted => break,
        }
    }
    assert_eq!(emails, 7);
}
