// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration validation
//!
//! Checks the contract a declaration must satisfy for the external
//! scheduler and operator to behave correctly when given it. Reachability
//! of script URIs and capacity planning stay out of scope; shape does not.

use crate::template::EnvTemplate;
use crate::workflow::WorkflowDef;
use std::collections::HashSet;
use thiserror::Error;

/// Errors from [`validate`].
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("workflow '{workflow}' declares no tasks")]
    EmptyWorkflow { workflow: String },

    #[error("workflow '{workflow}' declares task '{task}' more than once")]
    DuplicateTask { workflow: String, task: String },

    #[error("task '{task}' in workflow '{workflow}' requests zero worker instances")]
    ZeroInstances { workflow: String, task: String },

    #[error("task '{task}' in workflow '{workflow}' has no run-date variable in its environment")]
    MissingRunDate { workflow: String, task: String },

    #[error("task '{task}' in workflow '{workflow}' has no bucket variable in its environment")]
    MissingBucket { workflow: String, task: String },

    #[error("task '{task}' in workflow '{workflow}' has a non-absolute script uri: {uri}")]
    InvalidUri {
        workflow: String,
        task: String,
        uri: String,
    },

    #[error("task '{task}' in workflow '{workflow}' enables notifications but lists no addresses")]
    NoRecipients { workflow: String, task: String },
}

/// Validate a workflow declaration against the scheduler/operator contract.
///
/// The first violation found is returned; suspicious-but-legal shapes are
/// traced at `warn` level instead.
pub fn validate(workflow: &WorkflowDef) -> Result<(), ValidationError> {
    let wf = workflow.id.to_string();

    if workflow.tasks.is_empty() {
        return Err(ValidationError::EmptyWorkflow { workflow: wf });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for task in &workflow.tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(ValidationError::DuplicateTask {
                workflow: wf,
                task: task.id.to_string(),
            });
        }
    }

    for task in &workflow.tasks {
        if task.instance_count == 0 {
            return Err(ValidationError::ZeroInstances {
                workflow: wf,
                task: task.id.to_string(),
            });
        }

        // The operator's minimum variable contract: a logical run date and
        // a storage bucket, both deferred-bound.
        let has_template = |t: EnvTemplate| task.env.values().any(|v| v.as_template() == Some(t));
        if !has_template(EnvTemplate::RunDate) {
            return Err(ValidationError::MissingRunDate {
                workflow: wf,
                task: task.id.to_string(),
            });
        }
        if !has_template(EnvTemplate::OperatorBucket) {
            return Err(ValidationError::MissingBucket {
                workflow: wf,
                task: task.id.to_string(),
            });
        }

        if !is_absolute_http(&task.uri) {
            return Err(ValidationError::InvalidUri {
                workflow: wf,
                task: task.id.to_string(),
                uri: task.uri.clone(),
            });
        }

        let policy = workflow.effective_policy(task);
        if (policy.email_on_failure || policy.email_on_retry) && policy.email.is_empty() {
            return Err(ValidationError::NoRecipients {
                workflow: wf,
                task: task.id.to_string(),
            });
        }
        if policy.email_on_retry && policy.retries == 0 {
            tracing::warn!(
                workflow = %workflow.id,
                task = %task.id,
                "retry notifications enabled with a zero retry budget"
            );
        }
    }

    Ok(())
}

/// A stable, network-retrievable location: absolute http(s) with a host.
fn is_absolute_http(uri: &str) -> bool {
    let rest = uri
        .strip_prefix("https://")
        .or_else(|| uri.strip_prefix("http://"));
    matches!(rest, Some(r) if !r.is_empty() && !r.starts_with('/'))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
