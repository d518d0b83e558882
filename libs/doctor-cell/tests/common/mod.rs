#![allow(dead_code)]

use std::collections::HashSet;

use chrono::{NaiveDateTime, Weekday};

use doctor_cell::models::{DoctorProfile, Specialty, WorkingHours};
use doctor_cell::services::SlotLedger;
use shared_utils::test_utils::time_of_day;

/// Minimal in-memory stand-in for the appointment ledger.
#[derive(Default)]
pub struct BookedSlots {
    taken: HashSet<(String, NaiveDateTime)>,
}

impl BookedSlots {
    pub fn book(&mut self, doctor_id: &str, slot: NaiveDateTime) {
        self.taken.insert((doctor_id.to_string(), slot));
    }
}

impl SlotLedger for BookedSlots {
    fn is_slot_taken(&self, doctor_id: &str, slot: NaiveDateTime) -> bool {
        self.taken.contains(&(doctor_id.to_string(), slot))
    }
}

pub fn hours(open: (u32, u32), close: (u32, u32)) -> WorkingHours {
    WorkingHours::new(time_of_day(open.0, open.1), time_of_day(close.0, close.1)).unwrap()
}

/// Mon-Fri 09:00-17:00.
pub fn weekday_doctor(id: &str, name: &str, specialty: Specialty) -> DoctorProfile {
    DoctorProfile::new(id, name, specialty, hours((9, 0), (17, 0)))
}

pub fn weekend_doctor(id: &str) -> DoctorProfile {
    DoctorProfile::new(id, "Dr. Weekend", Specialty::GeneralPractitioner, hours((10, 0), (12, 0)))
        .with_working_days([Weekday::Sat, Weekday::Sun])
}
