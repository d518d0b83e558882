// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use doctor_cell::models::Specialty;
use shared_models::{AppError, EntityKind};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub patient_id: String,
    pub time_slot: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: NaiveDateTime,
}

impl Appointment {
    pub fn confirmed(
        doctor_id: impl Into<String>,
        patient_id: impl Into<String>,
        time_slot: NaiveDateTime,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            doctor_id: doctor_id.into(),
            patient_id: patient_id.into(),
            time_slot,
            status: AppointmentStatus::Confirmed,
            created_at,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == AppointmentStatus::Confirmed
    }

    /// Checks the invariants that must hold when the appointment is created.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), AppointmentError> {
        if self.doctor_id.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Doctor ID is invalid".to_string()));
        }
        if self.patient_id.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Patient ID is invalid".to_string()));
        }
        if self.time_slot <= now {
            return Err(AppointmentError::ValidationError(format!(
                "Appointment time must be in the future: {}",
                self.time_slot
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment [ID={}, Status={}, DoctorID={}, PatientID={}]",
            self.id, self.status, self.doctor_id, self.patient_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "CONFIRMED"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Booking against a doctor id, a doctor name, or free symptom text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_identifier: String,
    pub patient_id: String,
    pub requested_time: Option<NaiveDateTime>,
}

impl BookAppointmentRequest {
    pub fn new(doctor_identifier: impl Into<String>, patient_id: impl Into<String>) -> Self {
        Self {
            doctor_identifier: doctor_identifier.into(),
            patient_id: patient_id.into(),
            requested_time: None,
        }
    }

    pub fn requested_at(mut self, requested_time: NaiveDateTime) -> Self {
        self.requested_time = Some(requested_time);
        self
    }
}

/// Booking with whichever doctor of a specialty is free first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyBookingRequest {
    pub specialty: Specialty,
    pub patient_id: String,
    /// Search anchor; now when absent.
    pub anchor_time: Option<NaiveDateTime>,
}

impl SpecialtyBookingRequest {
    pub fn new(specialty: Specialty, patient_id: impl Into<String>) -> Self {
        Self {
            specialty,
            patient_id: patient_id.into(),
            anchor_time: None,
        }
    }

    pub fn anchored_at(mut self, anchor_time: NaiveDateTime) -> Self {
        self.anchor_time = Some(anchor_time);
        self
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Appointment with ID {0} not found")]
    AppointmentNotFound(String),

    #[error("No doctors found for specialization: {specialty}")]
    SpecialtyEmpty { specialty: Specialty },

    #[error("No available slot: {0}")]
    NoAvailability(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error("Appointment ledger is unavailable")]
    LedgerUnavailable,
}

impl From<AppError> for AppointmentError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound { entity: EntityKind::Doctor, id } => AppointmentError::DoctorNotFound(id),
            AppError::NotFound { entity: EntityKind::Patient, id } => AppointmentError::PatientNotFound(id),
            AppError::NotFound { entity: EntityKind::Appointment, id } => {
                AppointmentError::AppointmentNotFound(id)
            }
            AppError::InvalidInput(msg) => AppointmentError::InvalidInput(msg),
            AppError::NoAvailability(msg) => AppointmentError::NoAvailability(msg),
            AppError::ValidationFailure(msg) => AppointmentError::ValidationError(msg),
            AppError::Internal(_) => AppointmentError::LedgerUnavailable,
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::DoctorNotFound(id) => AppError::not_found(EntityKind::Doctor, id),
            AppointmentError::PatientNotFound(id) => AppError::not_found(EntityKind::Patient, id),
            AppointmentError::AppointmentNotFound(id) => AppError::not_found(EntityKind::Appointment, id),
            AppointmentError::SpecialtyEmpty { specialty } => {
                AppError::NoAvailability(format!("No doctors registered as {}", specialty))
            }
            AppointmentError::NoAvailability(msg) => AppError::NoAvailability(msg),
            AppointmentError::InvalidInput(msg) => AppError::InvalidInput(msg),
            AppointmentError::ValidationError(msg) => AppError::ValidationFailure(msg),
            err @ AppointmentError::InvalidStatusTransition(_) => AppError::ValidationFailure(err.to_string()),
            err @ AppointmentError::LedgerUnavailable => AppError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_utils::test_utils::at;

    #[test]
    fn test_new_appointments_are_confirmed_with_fresh_ids() {
        let first = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 20, 0));
        let second = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 0), at(2025, 6, 1, 20, 0));
        assert!(first.is_confirmed());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_slot_must_be_strictly_in_the_future() {
        let now = at(2025, 6, 2, 9, 0);
        let at_now = Appointment::confirmed("D1", "MRN-001", now, now);
        assert_matches!(at_now.validate(now), Err(AppointmentError::ValidationError(_)));

        let later = Appointment::confirmed("D1", "MRN-001", at(2025, 6, 2, 9, 30), now);
        assert!(later.validate(now).is_ok());
    }

    #[test]
    fn test_status_serializes_as_upper_case_tag() {
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
    }

    #[test]
    fn test_errors_map_into_shared_taxonomy() {
        let shared: AppError = AppointmentError::PatientNotFound("MRN-9".into()).into();
        assert_eq!(shared, AppError::not_found(EntityKind::Patient, "MRN-9"));

        let shared: AppError = AppointmentError::SpecialtyEmpty {
            specialty: Specialty::Dentist,
        }
        .into();
        assert_matches!(shared, AppError::NoAvailability(_));

        let back: AppointmentError = AppError::not_found(EntityKind::Doctor, "D7").into();
        assert_eq!(back, AppointmentError::DoctorNotFound("D7".into()));
    }
}
