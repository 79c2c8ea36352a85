// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work item definition

use crate::id::TaskId;
use crate::policy::ExecutionPolicy;
use crate::template::EnvValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One unit of work within a workflow.
///
/// The compute operator receives this (with its environment resolved) and
/// provisions `instance_count` workers, fetches the script at `uri`, and
/// executes it. The declaration does not validate reachability of the URI
/// or perform capacity planning on the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDef {
    pub id: TaskId,
    /// Human-readable job label shown in scheduler and operator views.
    pub job_name: String,
    /// Desired worker instances; passed verbatim to the operator.
    pub instance_count: u32,
    /// Named runtime variables, in declaration order.
    #[serde(default)]
    pub env: IndexMap<String, EnvValue>,
    /// Network-retrievable remote script location (branch- or tag-pinned).
    pub uri: String,
    /// Per-task policy override; `None` inherits the workflow default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<ExecutionPolicy>,
}

impl TaskDef {
    pub fn new(id: impl Into<TaskId>, job_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_name: job_name.into(),
            instance_count: 1,
            env: IndexMap::new(),
            uri: uri.into(),
            policy: None,
        }
    }

    /// Set the desired worker instance count.
    pub fn with_instance_count(mut self, count: u32) -> Self {
        self.instance_count = count;
        self
    }

    /// Add a named runtime variable.
    pub fn with_env(mut self, name: impl Into<String>, value: EnvValue) -> Self {
        self.env.insert(name.into(), value);
        self
    }

    /// Override the inherited execution policy for this task only.
    pub fn with_policy(mut self, policy: ExecutionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
