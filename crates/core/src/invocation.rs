// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator invocation payload

use crate::id::{TaskId, WorkflowId};
use crate::template::{OperatorConfig, ResolveError, RunContext};
use crate::workflow::WorkflowDef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from building an invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("no task '{task}' in workflow '{workflow}'")]
    UnknownTask { workflow: String, task: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Exactly what the compute operator receives for one execution:
/// identifiers, label, verbatim instance count, fully-resolved runtime
/// variables, and the script location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInvocation {
    pub workflow_id: WorkflowId,
    pub task_id: TaskId,
    pub job_name: String,
    pub instance_count: u32,
    pub env: IndexMap<String, String>,
    pub uri: String,
}

impl WorkflowDef {
    /// Build the operator payload for one task of one execution, resolving
    /// every templated variable against the run context and operator
    /// configuration.
    pub fn invocation(
        &self,
        task_id: &str,
        ctx: &RunContext,
        cfg: &OperatorConfig,
    ) -> Result<JobInvocation, InvocationError> {
        let task = self
            .get_task(task_id)
            .ok_or_else(|| InvocationError::UnknownTask {
                workflow: self.id.to_string(),
                task: task_id.to_string(),
            })?;

        let mut env = IndexMap::with_capacity(task.env.len());
        for (name, value) in &task.env {
            env.insert(name.clone(), value.resolve(ctx, cfg)?);
        }

        tracing::debug!(
            workflow = %self.id,
            task = %task.id,
            run = ctx.run_id.short(12),
            logical_date = %ctx.logical_date,
            "resolved operator invocation"
        );

        Ok(JobInvocation {
            workflow_id: self.id.clone(),
            task_id: task.id.clone(),
            job_name: task.job_name.clone(),
            instance_count: task.instance_count,
            env,
            uri: task.uri.clone(),
        })
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
