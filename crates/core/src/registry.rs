// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow registration

use crate::id::WorkflowId;
use crate::validate::{validate, ValidationError};
use crate::workflow::WorkflowDef;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Errors from [`Registry::register`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("workflow '{0}' is already registered")]
    Duplicate(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The set of declared workflows handed to the external scheduler.
///
/// Registration order is preserved; each workflow is validated on the way
/// in, so a registry never holds a declaration the scheduler or operator
/// would reject. Serializes for handoff only; there is deliberately no
/// deserialization path around `register`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registry {
    workflows: IndexMap<WorkflowId, WorkflowDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a workflow. Duplicate IDs are rejected.
    pub fn register(&mut self, workflow: WorkflowDef) -> Result<(), RegistryError> {
        validate(&workflow)?;
        if self.workflows.contains_key(workflow.id.as_str()) {
            return Err(RegistryError::Duplicate(workflow.id.to_string()));
        }

        tracing::info!(
            workflow = %workflow.id,
            schedule = %workflow.schedule,
            tasks = workflow.tasks.len(),
            "registered workflow"
        );
        self.workflows.insert(workflow.id.clone(), workflow);
        Ok(())
    }

    /// Look up a workflow by ID.
    pub fn get(&self, id: &str) -> Option<&WorkflowDef> {
        self.workflows.get(id)
    }

    /// Registered IDs in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &WorkflowId> {
        self.workflows.keys()
    }

    /// Registered workflows in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkflowDef> {
        self.workflows.values()
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
