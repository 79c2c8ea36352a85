// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for catalog specs.

use airlift_core::WorkflowDef;
use chrono::NaiveDate;

pub const OWNER: &str = "mdoglio@mozilla.com";

pub fn crash_aggregates() -> WorkflowDef {
    let registry = airlift_catalog::builtin().unwrap();
    registry.get("crash_aggregates").unwrap().clone()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
