use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use shared_config::AppConfig;
use shared_utils::time::slot_fits_window;

use crate::models::DoctorProfile;

/// Read access to booked slots, implemented by the appointment ledger.
pub trait SlotLedger {
    /// True if a CONFIRMED appointment for `doctor_id` starts exactly at `slot`.
    fn is_slot_taken(&self, doctor_id: &str, slot: NaiveDateTime) -> bool;
}

pub struct AvailabilityService {
    slot_minutes: i64,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            slot_minutes: config.slot_duration_minutes(),
        }
    }

    /// Weekday is a working day and the whole slot fits in working hours.
    pub fn is_working(&self, doctor: &DoctorProfile, instant: NaiveDateTime) -> bool {
        if !doctor.works_on(instant.weekday()) {
            return false;
        }
        let hours = &doctor.working_hours;
        slot_fits_window(instant.time(), hours.opens_at, hours.closes_at, self.slot_minutes)
    }

    /// Slots sit on fixed positions, so an exact timestamp match is the
    /// whole conflict check.
    pub fn is_free<L>(&self, doctor: &DoctorProfile, instant: NaiveDateTime, ledger: &L) -> bool
    where
        L: SlotLedger + ?Sized,
    {
        if !self.is_working(doctor, instant) {
            return false;
        }
        if ledger.is_slot_taken(&doctor.id, instant) {
            debug!("Doctor {} already booked at {}", doctor.id, instant);
            return false;
        }
        true
    }
}
