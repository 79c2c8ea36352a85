// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daily crash-aggregates workflow
//!
//! Launches a managed big-data cluster once per day and runs the crash
//! aggregate view script against it. Failures page the owner, retry up to
//! three times half an hour apart, and block the next day's run until the
//! prior one succeeds.

use airlift_core::{EnvTemplate, EnvValue, ExecutionPolicy, Schedule, TaskDef, WorkflowDef};
use chrono::NaiveDate;
use std::time::Duration;

const OWNER: &str = "mdoglio@mozilla.com";

/// Branch-pinned location of the remote job script.
const SCRIPT_URI: &str =
    "https://raw.githubusercontent.com/mozilla/telemetry-airflow/master/jobs/crash_aggregate_view.sh";

/// Worker instances sized for one day of crash pings.
const INSTANCE_COUNT: u32 = 9;

// Allow expect here as the date is a compile-time constant
#[allow(clippy::expect_used)]
fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 6, 27).expect("constant date is valid")
}

fn default_policy() -> ExecutionPolicy {
    ExecutionPolicy::new(OWNER, start_date())
        .with_depends_on_past(true)
        .with_email(OWNER)
        .with_email_on_failure(true)
        .with_email_on_retry(true)
        .with_retries(3, Duration::from_secs(30 * 60))
}

/// The crash_aggregates workflow: one daily task building the crash
/// aggregate view on a 9-instance cluster.
pub fn workflow() -> WorkflowDef {
    WorkflowDef::new("crash_aggregates", Schedule::Daily, default_policy()).with_task(
        TaskDef::new("crash_aggregate_view", "Crash Aggregate View", SCRIPT_URI)
            .with_instance_count(INSTANCE_COUNT)
            .with_env("date", EnvValue::template(EnvTemplate::RunDate))
            .with_env("bucket", EnvValue::template(EnvTemplate::OperatorBucket)),
    )
}

#[cfg(test)]
#[path = "crash_aggregates_tests.rs"]
mod tests;
