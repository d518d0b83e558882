// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use doctor_cell::models::DoctorProfile;
use doctor_cell::services::{DoctorService, SchedulingService, SpecialtyMatcher};
use shared_config::AppConfig;
use shared_models::{require_id, AppError};
use shared_utils::clock::Clock;
use shared_utils::time::format_slot;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest,
    SpecialtyBookingRequest,
};
use crate::services::context::ClinicContext;
use crate::services::lifecycle::AppointmentLifecycleService;

/// The only place appointments are created or change status.
pub struct AppointmentBookingService {
    scheduling_service: SchedulingService,
    specialty_matcher: SpecialtyMatcher,
    lifecycle_service: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            scheduling_service: SchedulingService::new(config, clock),
            specialty_matcher: SpecialtyMatcher::new(),
            lifecycle_service: AppointmentLifecycleService::new(),
        }
    }

    /// Book with a doctor given by id, name, or symptom text.
    ///
    /// An identifier that matches no doctor is treated as a symptom and routed
    /// to the first doctor of the matching specialty. A requested time that is
    /// taken or outside working hours moves to the next free slot after it.
    pub fn book_appointment(
        &self,
        context: &mut ClinicContext,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        require_id(&request.patient_id, "Patient ID")?;
        require_id(&request.doctor_identifier, "Doctor identifier")?;

        let doctor = self.resolve_doctor(context.doctors(), &request.doctor_identifier)?;

        context.patients().find_by_id(&request.patient_id)?;

        let slot = self
            .scheduling_service
            .resolve_or_next(doctor, request.requested_time, context.ledger())
            .ok_or_else(|| {
                AppointmentError::NoAvailability(format!("No available slot for Doctor: {}", doctor.name))
            })?;

        let doctor_id = doctor.id.clone();
        self.create_and_save_appointment(context, doctor_id, request.patient_id, slot)
    }

    /// Book with whichever doctor of the specialty has the earliest free slot.
    ///
    /// Candidates are visited in ascending id order and only a strictly
    /// earlier slot replaces the current best, so ties go to the lowest id.
    pub fn book_by_specialty(
        &self,
        context: &mut ClinicContext,
        request: SpecialtyBookingRequest,
    ) -> Result<Appointment, AppointmentError> {
        require_id(&request.patient_id, "Patient ID")?;
        context.patients().find_by_id(&request.patient_id)?;

        let candidates = context.doctors().doctors_by_specialty(request.specialty);
        if candidates.is_empty() {
            warn!("No doctors registered as {}", request.specialty);
            return Err(AppointmentError::SpecialtyEmpty {
                specialty: request.specialty,
            });
        }

        let anchor = request
            .anchor_time
            .unwrap_or_else(|| self.scheduling_service.now());

        let mut best: Option<(&DoctorProfile, NaiveDateTime)> = None;
        for doctor in candidates {
            match self.scheduling_service.find_next_slot(doctor, anchor, context.ledger()) {
                Some(slot) => {
                    if best.map_or(true, |(_, best_slot)| slot < best_slot) {
                        best = Some((doctor, slot));
                    }
                }
                None => debug!("Doctor {} has no free slot in the horizon, skipping", doctor.id),
            }
        }

        let (doctor, slot) = best.ok_or_else(|| {
            AppointmentError::NoAvailability(format!(
                "No available slots found for any {}",
                request.specialty
            ))
        })?;

        info!("Auto-matched doctor {} ({}) at {}", doctor.name, doctor.id, format_slot(&slot));
        let doctor_id = doctor.id.clone();
        self.create_and_save_appointment(context, doctor_id, request.patient_id, slot)
    }

    /// Next free slot for a doctor from now, without booking it.
    pub fn suggest_earliest_slot(
        &self,
        context: &ClinicContext,
        doctor_id: &str,
    ) -> Result<NaiveDateTime, AppointmentError> {
        let doctor = context.doctors().find_by_id(doctor_id)?;
        let now = self.scheduling_service.now();
        self.scheduling_service
            .find_next_slot(doctor, now, context.ledger())
            .ok_or_else(|| {
                AppointmentError::NoAvailability(format!("No available slot for Doctor: {}", doctor.name))
            })
    }

    pub fn cancel_appointment(
        &self,
        context: &mut ClinicContext,
        appointment_id: &str,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = context.ledger().find_by_id(appointment_id)?;
        self.lifecycle_service
            .validate_status_transition(&appointment.status, &AppointmentStatus::Cancelled)?;

        let id = appointment.id;
        let cancelled = context
            .ledger_mut()
            .set_status(id, AppointmentStatus::Cancelled)?
            .clone();

        info!("Appointment {} cancelled, slot {} released", cancelled.id, format_slot(&cancelled.time_slot));
        Ok(cancelled)
    }

    fn resolve_doctor<'a>(
        &self,
        doctors: &'a DoctorService,
        identifier: &str,
    ) -> Result<&'a DoctorProfile, AppointmentError> {
        match doctors.resolve(identifier) {
            Ok(doctor) => Ok(doctor),
            Err(AppError::NotFound { .. }) => {
                debug!("No doctor with id or name {:?}, treating it as a symptom", identifier);
                self.specialty_matcher
                    .suggest_doctor(identifier, doctors)
                    .ok_or_else(|| {
                        AppointmentError::DoctorNotFound(format!("No doctor found for symptom: {}", identifier))
                    })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_and_save_appointment(
        &self,
        context: &mut ClinicContext,
        doctor_id: String,
        patient_id: String,
        slot: NaiveDateTime,
    ) -> Result<Appointment, AppointmentError> {
        let now = self.scheduling_service.now();
        let appointment = Appointment::confirmed(doctor_id, patient_id, slot, now);
        appointment.validate(now)?;

        context.ledger_mut().append(appointment.clone())?;
        info!("Appointment booked: {} at {}", appointment.id, format_slot(&slot));
        Ok(appointment)
    }
}
