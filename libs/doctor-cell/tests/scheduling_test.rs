mod common;

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Timelike, Weekday};

use doctor_cell::models::{DoctorProfile, Specialty};
use doctor_cell::services::SchedulingService;
use shared_utils::clock::FixedClock;
use shared_utils::test_utils::{at, clock_at, sunday_evening_clock, TestConfig};

use common::{hours, weekday_doctor, BookedSlots};

fn scheduler(clock: FixedClock) -> SchedulingService {
    SchedulingService::new(&TestConfig::default().to_app_config(), Arc::new(clock))
}

fn strange() -> DoctorProfile {
    weekday_doctor("D1", "Dr. Strange", Specialty::Cardiologist)
}

#[test]
fn test_saturday_request_moves_to_monday_opening() {
    let scheduler = scheduler(sunday_evening_clock());
    let ledger = BookedSlots::default();

    let slot = scheduler.resolve_or_next(&strange(), Some(at(2025, 6, 7, 10, 0)), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 9, 9, 0)));
}

#[test]
fn test_booked_request_moves_to_next_half_hour() {
    let scheduler = scheduler(sunday_evening_clock());
    let mut ledger = BookedSlots::default();
    ledger.book("D1", at(2025, 6, 2, 10, 0));

    let slot = scheduler.resolve_or_next(&strange(), Some(at(2025, 6, 2, 10, 0)), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 2, 10, 30)));
}

#[test]
fn test_opening_time_request_is_kept() {
    let scheduler = scheduler(sunday_evening_clock());
    let ledger = BookedSlots::default();

    let slot = scheduler.resolve_or_next(&strange(), Some(at(2025, 6, 2, 9, 0)), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 2, 9, 0)));
}

#[test]
fn test_minute_before_opening_rounds_to_opening() {
    let scheduler = scheduler(sunday_evening_clock());
    let ledger = BookedSlots::default();

    let slot = scheduler.resolve_or_next(&strange(), Some(at(2025, 6, 2, 8, 59)), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 2, 9, 0)));
}

#[test]
fn test_no_request_searches_from_now() {
    // Monday 10:12
    let scheduler = scheduler(clock_at(2025, 6, 2, 10, 12));
    let ledger = BookedSlots::default();

    let slot = scheduler.resolve_or_next(&strange(), None, &ledger);
    assert_eq!(slot, Some(at(2025, 6, 2, 10, 30)));
}

#[test]
fn test_past_anchor_is_clamped_to_now() {
    let scheduler = scheduler(clock_at(2025, 6, 4, 15, 40));
    let ledger = BookedSlots::default();

    let slot = scheduler.find_next_slot(&strange(), at(2025, 6, 2, 9, 0), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 4, 16, 0)));
}

#[test]
fn test_slot_at_now_is_not_returned() {
    let clock = FixedClock::at(at(2025, 6, 2, 10, 0) + Duration::seconds(30));
    let scheduler = scheduler(clock);
    let ledger = BookedSlots::default();

    let slot = scheduler.find_next_slot(&strange(), scheduler.now(), &ledger);
    assert_eq!(slot, Some(at(2025, 6, 2, 10, 30)));
}

#[test]
fn test_found_slots_respect_working_window() {
    let scheduler = scheduler(sunday_evening_clock());
    let mut ledger = BookedSlots::default();
    let doctor = strange();
    let mut from = at(2025, 6, 2, 0, 0);

    for _ in 0..40 {
        let slot = scheduler.find_next_slot(&doctor, from, &ledger).unwrap();
        assert!(doctor.works_on(slot.weekday()));
        assert!(slot.time() >= doctor.working_hours.opens_at);
        assert!(slot.time() + Duration::minutes(30) <= doctor.working_hours.closes_at);
        assert!(slot.minute() == 0 || slot.minute() == 30);
        ledger.book(&doctor.id, slot);
        from = slot;
    }
}

#[test]
fn test_horizon_exhaustion() {
    // Only works Sundays. From Monday 2025-06-02 the 480 probes reach Wednesday
    // 2025-06-11, so Sunday 2025-06-08 is the one working day in range.
    let sunday_only = DoctorProfile::new("D5", "Dr. Sunday", Specialty::Dentist, hours((8, 0), (12, 0)))
        .with_working_days([Weekday::Sun]);
    let scheduler = scheduler(sunday_evening_clock());
    let mut ledger = BookedSlots::default();

    assert_eq!(
        scheduler.find_next_slot(&sunday_only, at(2025, 6, 2, 0, 0), &ledger),
        Some(at(2025, 6, 8, 8, 0))
    );

    let mut slot = at(2025, 6, 8, 8, 0);
    while slot.hour() < 12 {
        ledger.book("D5", slot);
        slot += Duration::minutes(30);
    }
    assert_eq!(scheduler.find_next_slot(&sunday_only, at(2025, 6, 2, 0, 0), &ledger), None);
}

#[test]
fn test_shorter_horizon_from_config() {
    let config = TestConfig {
        search_horizon_days: 1,
        ..TestConfig::default()
    }
    .to_app_config();
    let scheduler = SchedulingService::new(&config, Arc::new(sunday_evening_clock()));
    let ledger = BookedSlots::default();

    // Friday 17:00 -> next opening is Monday, three days out.
    assert_eq!(scheduler.find_next_slot(&strange(), at(2025, 6, 6, 17, 0), &ledger), None);
}

#[test]
fn test_request_at_last_representable_date_finds_nothing() {
    let scheduler = scheduler(sunday_evening_clock());
    let ledger = BookedSlots::default();

    // 23:45 cannot be rounded up without leaving the calendar.
    let last_evening = NaiveDate::MAX.and_hms_opt(23, 45, 0).unwrap();
    assert_eq!(scheduler.resolve_or_next(&strange(), Some(last_evening), &ledger), None);

    // 23:00 is a boundary, but stepping past 23:30 leaves the calendar.
    let last_hour = NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap();
    assert_eq!(scheduler.find_next_slot(&strange(), last_hour, &ledger), None);
}
