use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use shared_models::AppError;

/// Input format for requested slots, e.g. `2025-12-09 10:30`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display format, e.g. `Tue, 09 Dec 2025 10:30 AM`.
pub const DISPLAY_FORMAT: &str = "%a, %d %b %Y %I:%M %p";

pub fn parse_slot(raw: &str) -> Result<NaiveDateTime, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Timestamp cannot be empty".to_string()));
    }
    NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT).map_err(|e| {
        debug!("Rejected timestamp {:?}: {}", raw, e);
        AppError::InvalidInput(format!("Timestamp '{}' is not in yyyy-MM-dd HH:mm form", trimmed))
    })
}

pub fn format_slot(slot: &NaiveDateTime) -> String {
    slot.format(DISPLAY_FORMAT).to_string()
}

pub fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

/// Rounds up to the next slot boundary within the hour.
///
/// With 30-minute slots: 10:12 -> 10:30, 10:45 -> 11:00, 10:00 stays.
/// Seconds are dropped before rounding. `None` when the boundary lies past
/// the last representable date.
pub fn round_to_next_slot(instant: NaiveDateTime, slot_minutes: i64) -> Option<NaiveDateTime> {
    let truncated = truncate_to_minute(instant);
    let past_boundary = i64::from(truncated.minute()) % slot_minutes;
    if past_boundary == 0 {
        Some(truncated)
    } else {
        truncated.checked_add_signed(Duration::minutes(slot_minutes - past_boundary))
    }
}

/// True when a slot starting at `start` ends no later than `closes` without
/// wrapping past midnight.
pub fn slot_fits_window(start: NaiveTime, opens: NaiveTime, closes: NaiveTime, slot_minutes: i64) -> bool {
    let start_secs = i64::from(start.num_seconds_from_midnight());
    let end_secs = start_secs + slot_minutes * 60;
    start_secs >= i64::from(opens.num_seconds_from_midnight())
        && end_secs <= i64::from(closes.num_seconds_from_midnight())
}
