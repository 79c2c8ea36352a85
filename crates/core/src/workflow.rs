// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow definition

use crate::clock::Clock;
use crate::id::WorkflowId;
use crate::policy::ExecutionPolicy;
use crate::schedule::Schedule;
use crate::task::TaskDef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, recurring unit of scheduled work.
///
/// Constructed once from static values and handed to the scheduler via a
/// [`Registry`]; the scheduler instantiates executions per recurrence tick.
///
/// [`Registry`]: crate::registry::Registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDef {
    pub id: WorkflowId,
    pub schedule: Schedule,
    /// Default policy every task inherits unless it carries an override.
    pub default_policy: ExecutionPolicy,
    pub tasks: Vec<TaskDef>,
}

impl WorkflowDef {
    pub fn new(
        id: impl Into<WorkflowId>,
        schedule: Schedule,
        default_policy: ExecutionPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            schedule,
            default_policy,
            tasks: Vec::new(),
        }
    }

    /// Add a work item.
    pub fn with_task(mut self, task: TaskDef) -> Self {
        self.tasks.push(task);
        self
    }

    /// Get a task by ID.
    pub fn get_task(&self, task_id: &str) -> Option<&TaskDef> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// The policy in effect for a task: its own override, or the workflow
    /// default.
    pub fn effective_policy<'a>(&'a self, task: &'a TaskDef) -> &'a ExecutionPolicy {
        task.policy.as_ref().unwrap_or(&self.default_policy)
    }

    /// Whether `date` is an eligible logical run date for this workflow.
    pub fn is_due(&self, date: NaiveDate) -> bool {
        self.schedule.is_due(date, self.default_policy.start_date)
    }

    /// Whether the clock's current UTC date is an eligible run date.
    pub fn is_due_today(&self, clock: &impl Clock) -> bool {
        self.is_due(clock.today_utc())
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
