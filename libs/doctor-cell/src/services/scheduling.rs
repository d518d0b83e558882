use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use shared_config::AppConfig;
use shared_utils::clock::Clock;
use shared_utils::time::round_to_next_slot;

use crate::models::DoctorProfile;
use crate::services::availability::{AvailabilityService, SlotLedger};

/// Forward slot search over a bounded horizon.
///
/// The search is a linear probe over slot positions; results depend on the
/// step size and probe count, so both come from [`AppConfig`] and default to
/// 30 minutes and 480 probes (10 days).
pub struct SchedulingService {
    availability_service: AvailabilityService,
    clock: Arc<dyn Clock>,
    slot_minutes: i64,
    horizon_probes: i64,
}

impl SchedulingService {
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            availability_service: AvailabilityService::new(config),
            clock,
            slot_minutes: config.slot_duration_minutes(),
            horizon_probes: config.horizon_probes(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// First free slot at or after `from`, or `None` once the horizon is used up.
    ///
    /// `from` is clamped to now and rounded up to a slot boundary. A candidate
    /// is only accepted if it is strictly in the future.
    pub fn find_next_slot<L>(
        &self,
        doctor: &DoctorProfile,
        from: NaiveDateTime,
        ledger: &L,
    ) -> Option<NaiveDateTime>
    where
        L: SlotLedger + ?Sized,
    {
        let now = self.clock.now();
        let start = if from < now { now } else { from };
        let step = Duration::minutes(self.slot_minutes);
        let Some(mut candidate) = round_to_next_slot(start, self.slot_minutes) else {
            debug!("No slot boundary after {} for doctor {}", start, doctor.id);
            return None;
        };

        for probe in 0..self.horizon_probes {
            if candidate > now && self.availability_service.is_free(doctor, candidate, ledger) {
                debug!("Doctor {} free at {} after {} probes", doctor.id, candidate, probe + 1);
                return Some(candidate);
            }
            candidate = match candidate.checked_add_signed(step) {
                Some(next) => next,
                None => {
                    debug!("Slot search for doctor {} reached the last representable date", doctor.id);
                    return None;
                }
            };
        }

        debug!(
            "No slot for doctor {} within {} probes from {}",
            doctor.id, self.horizon_probes, start
        );
        None
    }

    /// Keeps a free requested slot as is; otherwise searches forward from the
    /// request, or from now when nothing was requested.
    pub fn resolve_or_next<L>(
        &self,
        doctor: &DoctorProfile,
        requested: Option<NaiveDateTime>,
        ledger: &L,
    ) -> Option<NaiveDateTime>
    where
        L: SlotLedger + ?Sized,
    {
        match requested {
            Some(slot) if self.availability_service.is_free(doctor, slot, ledger) => Some(slot),
            Some(slot) => {
                debug!("Requested slot {} unavailable for doctor {}, searching next", slot, doctor.id);
                self.find_next_slot(doctor, slot, ledger)
            }
            None => self.find_next_slot(doctor, self.clock.now(), ledger),
        }
    }
}
