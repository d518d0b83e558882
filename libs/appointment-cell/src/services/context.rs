use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{info, warn};

use doctor_cell::services::DoctorService;
use patient_cell::services::PatientService;

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest, SpecialtyBookingRequest};
use crate::services::booking::AppointmentBookingService;
use crate::services::gateway::{ClinicSnapshot, RecordGateway};
use crate::services::ledger::AppointmentLedger;

/// Everything a booking reads or writes: both directories and the ledger.
///
/// Passed explicitly into every scheduling operation. Booking takes it by
/// `&mut`, which makes the search-then-append sequence exclusive.
#[derive(Debug, Clone, Default)]
pub struct ClinicContext {
    doctors: DoctorService,
    patients: PatientService,
    ledger: AppointmentLedger,
}

impl ClinicContext {
    pub fn new(doctors: DoctorService, patients: PatientService) -> Self {
        Self {
            doctors,
            patients,
            ledger: AppointmentLedger::new(),
        }
    }

    pub fn load<G>(gateway: &G) -> Result<Self>
    where
        G: RecordGateway + ?Sized,
    {
        let doctors = DoctorService::from_profiles(gateway.load_doctors().context("loading doctors")?)
            .context("registering doctors")?;
        let patients = PatientService::from_profiles(gateway.load_patients().context("loading patients")?)
            .context("registering patients")?;
        let ledger = AppointmentLedger::restore(
            gateway.load_appointments().context("loading appointments")?,
        )
        .context("restoring appointment ledger")?;

        for appointment in ledger.iter() {
            if doctors.find_by_id(&appointment.doctor_id).is_err()
                || patients.find_by_id(&appointment.patient_id).is_err()
            {
                warn!("{} references an unknown doctor or patient", appointment);
            }
        }

        info!(
            "Loaded clinic with {} doctors, {} patients, {} appointments",
            doctors.len(),
            patients.len(),
            ledger.len()
        );

        Ok(Self {
            doctors,
            patients,
            ledger,
        })
    }

    pub fn doctors(&self) -> &DoctorService {
        &self.doctors
    }

    pub fn doctors_mut(&mut self) -> &mut DoctorService {
        &mut self.doctors
    }

    pub fn patients(&self) -> &PatientService {
        &self.patients
    }

    pub fn patients_mut(&mut self) -> &mut PatientService {
        &mut self.patients
    }

    pub fn ledger(&self) -> &AppointmentLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut AppointmentLedger {
        &mut self.ledger
    }

    pub fn snapshot(&self) -> ClinicSnapshot {
        ClinicSnapshot {
            doctors: self.doctors.doctors().cloned().collect(),
            patients: self.patients.patients().cloned().collect(),
            appointments: self.ledger.all(),
        }
    }
}

/// A clinic shared between several operators.
///
/// One lock guards the whole context, so two bookings can never both observe
/// the same slot as free.
pub struct SharedClinic {
    context: Mutex<ClinicContext>,
    booking_service: AppointmentBookingService,
}

impl SharedClinic {
    pub fn new(context: ClinicContext, booking_service: AppointmentBookingService) -> Self {
        Self {
            context: Mutex::new(context),
            booking_service,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ClinicContext>, AppointmentError> {
        self.context.lock().map_err(|_| AppointmentError::LedgerUnavailable)
    }

    pub fn book_appointment(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError> {
        let mut context = self.lock()?;
        self.booking_service.book_appointment(&mut context, request)
    }

    pub fn book_by_specialty(&self, request: SpecialtyBookingRequest) -> Result<Appointment, AppointmentError> {
        let mut context = self.lock()?;
        self.booking_service.book_by_specialty(&mut context, request)
    }

    pub fn cancel_appointment(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        let mut context = self.lock()?;
        self.booking_service.cancel_appointment(&mut context, appointment_id)
    }

    pub fn suggest_earliest_slot(&self, doctor_id: &str) -> Result<NaiveDateTime, AppointmentError> {
        let context = self.lock()?;
        self.booking_service.suggest_earliest_slot(&context, doctor_id)
    }

    /// Runs a read-only closure against the context under the lock.
    pub fn with_context<R, F>(&self, f: F) -> Result<R, AppointmentError>
    where
        F: FnOnce(&ClinicContext) -> R,
    {
        let context = self.lock()?;
        Ok(f(&*context))
    }

    pub fn snapshot(&self) -> Result<ClinicSnapshot, AppointmentError> {
        self.with_context(ClinicContext::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use crate::services::gateway::{InMemoryGateway, MockRecordGateway};
    use anyhow::anyhow;
    use doctor_cell::models::{DoctorProfile, Specialty, WorkingHours};
    use patient_cell::models::PatientProfile;
    use shared_utils::test_utils::{at, time_of_day};

    fn strange() -> DoctorProfile {
        DoctorProfile::new(
            "D1",
            "Dr. Strange",
            Specialty::Cardiologist,
            WorkingHours::new(time_of_day(9, 0), time_of_day(17, 0)).unwrap(),
        )
    }

    fn stark() -> PatientProfile {
        PatientProfile::new("MRN-001", "Tony Stark")
    }

    #[test]
    fn test_load_restores_ledger_from_gateway() {
        let mut cancelled = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 8, 0));
        cancelled.status = AppointmentStatus::Cancelled;
        let active = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 9, 0));

        let mut gateway = MockRecordGateway::new();
        gateway.expect_load_doctors().times(1).returning(|| Ok(vec![strange()]));
        gateway.expect_load_patients().times(1).returning(|| Ok(vec![stark()]));
        let stored = vec![cancelled, active.clone()];
        gateway
            .expect_load_appointments()
            .times(1)
            .returning(move || Ok(stored.clone()));

        let context = ClinicContext::load(&gateway).unwrap();
        assert_eq!(context.doctors().len(), 1);
        assert_eq!(context.ledger().len(), 2);
        assert_eq!(context.ledger().get(active.id), Some(&active));
    }

    #[test]
    fn test_load_reports_which_step_failed() {
        let mut gateway = MockRecordGateway::new();
        gateway.expect_load_doctors().returning(|| Ok(vec![strange()]));
        gateway
            .expect_load_patients()
            .returning(|| Err(anyhow!("patients file unreadable")));
        gateway.expect_load_appointments().never();

        let err = ClinicContext::load(&gateway).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("loading patients"));
        assert!(message.contains("patients file unreadable"));
    }

    #[test]
    fn test_load_rejects_double_booked_records() {
        let first = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 8, 0));
        let second = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 9, 0));
        let gateway = InMemoryGateway::new(vec![strange()], vec![stark()]).with_appointments(vec![first, second]);

        assert!(ClinicContext::load(&gateway).is_err());
    }

    #[test]
    fn test_snapshot_deduplicates_by_id() {
        let mut context = ClinicContext::default();
        context.doctors_mut().add_doctor(strange()).unwrap();
        let replaced = context
            .doctors_mut()
            .add_doctor(DoctorProfile { name: "Stephen Strange".to_string(), ..strange() })
            .unwrap();
        assert!(replaced.is_some());
        context.patients_mut().add_patient(stark()).unwrap();

        let snapshot = context.snapshot();
        assert_eq!(snapshot.doctors.len(), 1);
        assert_eq!(snapshot.doctors[0].name, "Stephen Strange");

        let reloaded = ClinicContext::load(&InMemoryGateway::from(snapshot.clone())).unwrap();
        assert_eq!(reloaded.snapshot(), snapshot);
    }
}
