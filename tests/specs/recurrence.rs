// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One eligible run per calendar day from the start date onward.

use crate::prelude::*;
use airlift_core::FakeClock;

#[test]
fn exactly_one_run_per_day_from_start_date() {
    let wf = crash_aggregates();
    let start = wf.default_policy.start_date;
    assert_eq!(start, date(2016, 6, 27));

    let runs = wf
        .schedule
        .runs_between(start, date(2016, 6, 1), date(2016, 7, 31));

    // 4 eligible days in June (27-30) + 31 in July, each exactly once.
    assert_eq!(runs.len(), 35);
    let mut deduped = runs.clone();
    deduped.dedup();
    assert_eq!(deduped, runs);
    assert!(runs.iter().all(|d| *d >= start));
}

#[test]
fn no_runs_before_the_start_date() {
    let wf = crash_aggregates();
    let start = wf.default_policy.start_date;
    assert!(!wf.schedule.is_due(date(2016, 6, 26), start));
    assert!(wf
        .schedule
        .runs_between(start, date(2016, 1, 1), date(2016, 6, 26))
        .is_empty());
}

#[test]
fn due_today_follows_the_wall_clock_date() {
    let wf = crash_aggregates();
    let mut clock = FakeClock::new(0, date(2016, 6, 26));
    assert!(!wf.is_due_today(&clock));
    clock.set_today(date(2016, 6, 27));
    assert!(wf.is_due_today(&clock));
    clock.set_today(date(2016, 7, 1));
    assert!(wf.is_due_today(&clock));
}

#[test]
fn consecutive_runs_are_one_day_apart() {
    let wf = crash_aggregates();
    let start = wf.default_policy.start_date;
    let mut day = start;
    for _ in 0..30 {
        let next = wf.schedule.next_after(day, start).unwrap();
        assert_eq!((next - day).num_days(), 1);
        day = next;
    }
}
