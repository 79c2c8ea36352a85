// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! airlift-catalog: the shipped workflow declarations
//!
//! Each module declares one workflow through the core builders. [`builtin`]
//! registers them all and is the only entry point a scheduler host needs.

pub mod crash_aggregates;

use airlift_core::{Registry, RegistryError};

/// Build the registry of every shipped declaration.
pub fn builtin() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    registry.register(crash_aggregates::workflow())?;
    Ok(registry)
}
