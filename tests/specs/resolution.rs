// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime variable resolution and the operator payload.

use crate::prelude::*;
use airlift_core::{OperatorConfig, RunContext, TaskDef};

#[test]
fn july_first_resolves_to_compact_date_and_bucket() {
    let wf = crash_aggregates();
    let ctx = RunContext::new("run-20160701", date(2016, 7, 1));
    let cfg = OperatorConfig::new("telemetry-airflow");

    let inv = wf.invocation("crash_aggregate_view", &ctx, &cfg).unwrap();
    assert_eq!(inv.env["date"], "20160701");
    assert!(!inv.env["bucket"].is_empty());
    assert_eq!(inv.env["bucket"], "telemetry-airflow");
}

#[test]
fn operator_receives_nine_instances_verbatim() {
    let wf = crash_aggregates();
    let ctx = RunContext::for_date(date(2016, 7, 1));
    let cfg = OperatorConfig::new("telemetry-airflow");

    let inv = wf.invocation("crash_aggregate_view", &ctx, &cfg).unwrap();
    assert_eq!(inv.instance_count, 9);
}

#[test]
fn reconfigured_instance_count_is_reflected_verbatim() {
    let mut wf = crash_aggregates();
    wf.tasks = wf
        .tasks
        .into_iter()
        .map(|t| TaskDef {
            instance_count: 20,
            ..t
        })
        .collect();

    let ctx = RunContext::new("run-1", date(2016, 7, 1));
    let cfg = OperatorConfig::new("telemetry-airflow");
    let inv = wf.invocation("crash_aggregate_view", &ctx, &cfg).unwrap();
    assert_eq!(inv.instance_count, 20);
}

#[test]
fn payload_serializes_for_the_operator_boundary() {
    let wf = crash_aggregates();
    let ctx = RunContext::new("run-1", date(2016, 7, 1));
    let cfg = OperatorConfig::new("telemetry-airflow");
    let inv = wf.invocation("crash_aggregate_view", &ctx, &cfg).unwrap();

    let json = serde_json::to_value(&inv).unwrap();
    assert_eq!(json["workflow_id"], "crash_aggregates");
    assert_eq!(json["task_id"], "crash_aggregate_view");
    assert_eq!(json["job_name"], "Crash Aggregate View");
    assert_eq!(json["env"]["date"], "20160701");
    assert_eq!(
        json["uri"],
        "https://raw.githubusercontent.com/mozilla/telemetry-airflow/master/jobs/crash_aggregate_view.sh"
    );
}

#[test]
fn unconfigured_bucket_fails_before_the_operator_runs() {
    let wf = crash_aggregates();
    let ctx = RunContext::new("run-1", date(2016, 7, 1));
    let err = wf
        .invocation("crash_aggregate_view", &ctx, &OperatorConfig::new(""))
        .unwrap_err();
    assert!(err.to_string().contains("bucket"));
}
