// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency gating: a failed day blocks the next day's run.

use crate::prelude::*;
use airlift_core::{dependency_gate, GateDecision, RunStatus};

#[test]
fn prior_failure_blocks_the_next_run() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    assert_eq!(
        dependency_gate(policy, Some(RunStatus::Failed)),
        GateDecision::Blocked
    );
}

#[test]
fn prior_success_unblocks() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    assert_eq!(
        dependency_gate(policy, Some(RunStatus::Success)),
        GateDecision::Proceed
    );
}

#[test]
fn first_run_has_nothing_to_gate_on() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    assert_eq!(dependency_gate(policy, None), GateDecision::Proceed);
}

#[test]
fn still_running_prior_day_also_blocks() {
    let wf = crash_aggregates();
    let policy = wf.effective_policy(&wf.tasks[0]);
    assert_eq!(
        dependency_gate(policy, Some(RunStatus::Running)),
        GateDecision::Blocked
    );
}
