//! Fixtures shared by the cells' test suites.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shared_config::AppConfig;

use crate::clock::FixedClock;

/// Panics on an impossible date; only meant for hand-written fixtures.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("bad fixture time {}-{}-{} {}:{}", year, month, day, hour, minute))
}

pub fn time_of_day(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| panic!("bad fixture time of day {}:{}", hour, minute))
}

/// Sunday 2025-06-01 20:00, the evening before the reference working week.
pub fn sunday_evening_clock() -> FixedClock {
    FixedClock::at(at(2025, 6, 1, 20, 0))
}

pub fn clock_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> FixedClock {
    FixedClock::at(at(year, month, day, hour, minute))
}

pub struct TestConfig {
    pub slot_duration_minutes: i64,
    pub search_horizon_days: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            slot_duration_minutes: 30,
            search_horizon_days: 10,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::new(self.slot_duration_minutes, self.search_horizon_days)
            .unwrap_or_else(|e| panic!("bad fixture config: {}", e))
    }
}
