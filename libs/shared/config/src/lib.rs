use std::env;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SLOT_MINUTES: i64 = 30;
pub const DEFAULT_HORIZON_DAYS: i64 = 10;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Slot duration of {0} minutes does not divide an hour")]
    InvalidSlotMinutes(i64),

    #[error("Search horizon must be at least one day, got {0}")]
    InvalidHorizonDays(i64),
}

/// Scheduler settings. Fields are only reachable through the validating
/// constructors, so the slot width always divides an hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Width of one bookable slot.
    slot_duration_minutes: i64,
    /// How many days ahead slot search probes before giving up.
    search_horizon_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slot_duration_minutes: DEFAULT_SLOT_MINUTES,
            search_horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

fn check_slot_minutes(minutes: i64) -> Result<i64, ConfigError> {
    if minutes > 0 && 60 % minutes == 0 {
        Ok(minutes)
    } else {
        Err(ConfigError::InvalidSlotMinutes(minutes))
    }
}

fn check_horizon_days(days: i64) -> Result<i64, ConfigError> {
    if days >= 1 {
        Ok(days)
    } else {
        Err(ConfigError::InvalidHorizonDays(days))
    }
}

impl AppConfig {
    pub fn new(slot_duration_minutes: i64, search_horizon_days: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            slot_duration_minutes: check_slot_minutes(slot_duration_minutes)?,
            search_horizon_days: check_horizon_days(search_horizon_days)?,
        })
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// missing or unusable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let slot_duration_minutes = match lookup("SCHEDULER_SLOT_MINUTES") {
            Some(raw) => match raw.trim().parse::<i64>().ok().map(check_slot_minutes) {
                Some(Ok(minutes)) => minutes,
                _ => {
                    warn!("SCHEDULER_SLOT_MINUTES={} does not divide an hour, using default", raw);
                    DEFAULT_SLOT_MINUTES
                }
            },
            None => {
                warn!("SCHEDULER_SLOT_MINUTES not set, using default");
                DEFAULT_SLOT_MINUTES
            }
        };

        let search_horizon_days = match lookup("SCHEDULER_HORIZON_DAYS") {
            Some(raw) => match raw.trim().parse::<i64>().ok().map(check_horizon_days) {
                Some(Ok(days)) => days,
                _ => {
                    warn!("SCHEDULER_HORIZON_DAYS={} is not a positive day count, using default", raw);
                    DEFAULT_HORIZON_DAYS
                }
            },
            None => {
                warn!("SCHEDULER_HORIZON_DAYS not set, using default");
                DEFAULT_HORIZON_DAYS
            }
        };

        Self {
            slot_duration_minutes,
            search_horizon_days,
        }
    }

    pub fn slot_duration_minutes(&self) -> i64 {
        self.slot_duration_minutes
    }

    pub fn search_horizon_days(&self) -> i64 {
        self.search_horizon_days
    }

    pub fn slots_per_day(&self) -> i64 {
        MINUTES_PER_DAY / self.slot_duration_minutes
    }

    /// Number of candidate slots probed before a search reports exhaustion.
    pub fn horizon_probes(&self) -> i64 {
        self.search_horizon_days.saturating_mul(self.slots_per_day())
    }
}
