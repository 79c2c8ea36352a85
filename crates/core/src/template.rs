// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred-binding runtime variables
//!
//! Task environments mix literal strings with templates resolved per
//! execution. Templates are a typed key→resolver mapping rather than
//! string interpolation: each variant is a pure function of the run
//! context and the operator configuration, so resolution is checked at
//! compile time and testable without a scheduler.

use crate::id::{IdGen, RunId, UuidIdGen};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from template resolution.
///
/// These are configuration defects surfaced before the operator runs, not
/// runtime data errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("storage bucket is not configured for the operator")]
    MissingBucket,
}

/// Per-execution values supplied by the external scheduler.
///
/// The logical date is the date the run represents, independent of the
/// wall-clock time the scheduler actually triggers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub run_id: RunId,
    pub logical_date: NaiveDate,
}

impl RunContext {
    pub fn new(run_id: impl Into<RunId>, logical_date: NaiveDate) -> Self {
        Self {
            run_id: run_id.into(),
            logical_date,
        }
    }

    /// Mint a context for one execution, generating the run ID.
    pub fn minted(gen: &impl IdGen, logical_date: NaiveDate) -> Self {
        Self::new(gen.next(), logical_date)
    }

    /// Mint a context with a fresh UUID run ID.
    pub fn for_date(logical_date: NaiveDate) -> Self {
        Self::minted(&UuidIdGen, logical_date)
    }

    /// The logical date in compact numeric form, e.g. `20160701`.
    pub fn date_nodash(&self) -> String {
        self.logical_date.format("%Y%m%d").to_string()
    }
}

/// Operator-category configuration injected into resolution.
///
/// Passed explicitly rather than read from process-wide state, so the
/// dependency is visible at the call site and fakeable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Storage bucket the operator stages artifacts in.
    pub bucket: String,
}

impl OperatorConfig {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

/// A runtime variable bound at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvTemplate {
    /// The logical run date in compact numeric form (`YYYYMMDD`).
    RunDate,
    /// The storage bucket name from the operator configuration.
    OperatorBucket,
}

impl EnvTemplate {
    /// Resolve to a concrete string for one execution.
    pub fn resolve(&self, ctx: &RunContext, cfg: &OperatorConfig) -> Result<String, ResolveError> {
        match self {
            EnvTemplate::RunDate => Ok(ctx.date_nodash()),
            EnvTemplate::OperatorBucket => {
                if cfg.bucket.is_empty() {
                    Err(ResolveError::MissingBucket)
                } else {
                    Ok(cfg.bucket.clone())
                }
            }
        }
    }
}

/// A task environment value: fixed at declaration time or templated.
///
/// Serialized forms:
///   `"some-value"`                 — literal
///   `{ template = "run_date" }`    — deferred binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Template { template: EnvTemplate },
    Literal(String),
}

impl EnvValue {
    pub fn literal(value: impl Into<String>) -> Self {
        EnvValue::Literal(value.into())
    }

    pub fn template(template: EnvTemplate) -> Self {
        EnvValue::Template { template }
    }

    /// The template variant, if this value is deferred.
    pub fn as_template(&self) -> Option<EnvTemplate> {
        match self {
            EnvValue::Template { template } => Some(*template),
            EnvValue::Literal(_) => None,
        }
    }

    /// Resolve to a concrete string for one execution.
    pub fn resolve(&self, ctx: &RunContext, cfg: &OperatorConfig) -> Result<String, ResolveError> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::Template { template } => template.resolve(ctx, cfg),
        }
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
