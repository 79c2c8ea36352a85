// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! airlift-core: typed scheduled-workflow declarations
//!
//! The types here describe recurring remote jobs — what to run, how often,
//! how failures are retried and reported — without owning any execution.
//! An external scheduler consumes registered [`WorkflowDef`]s and an
//! external compute operator consumes [`JobInvocation`] payloads.

pub mod clock;
pub mod contract;
pub mod duration;
pub mod id;
pub mod invocation;
pub mod policy;
pub mod registry;
pub mod schedule;
pub mod task;
pub mod template;
pub mod validate;
pub mod workflow;

pub use clock::{Clock, FakeClock, SystemClock};
pub use contract::{
    dependency_gate, notifications, retry_decision, GateDecision, Notification, RetryDecision,
    RunEvent, RunStatus,
};
pub use duration::{format_duration, parse_duration, DurationError};
pub use id::{IdGen, RunId, SequentialIdGen, TaskId, UuidIdGen, WorkflowId};
pub use invocation::{InvocationError, JobInvocation};
pub use policy::ExecutionPolicy;
pub use registry::{Registry, RegistryError};
pub use schedule::{Schedule, ScheduleError};
pub use task::TaskDef;
pub use template::{EnvTemplate, EnvValue, OperatorConfig, ResolveError, RunContext};
pub use validate::{validate, ValidationError};
pub use workflow::WorkflowDef;
