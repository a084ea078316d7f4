//! Shared test helpers for `linkedgpt-core` integration tests.
//!
//! In-memory repositories and recording vendor mocks so tests can assert on
//! exactly which calls reached the boundary.

#![allow(dead_code)]

pub mod repositories;
pub mod vendors;

use chrono::{DateTime, TimeZone, Utc};

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}
