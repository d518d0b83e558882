use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use doctor_cell::services::SlotLedger;
use shared_models::require_id;

use crate::models::{Appointment, AppointmentError, AppointmentStatus};

/// Append-only record of appointments in booking order.
///
/// Entries are never removed; the only mutation is a status change made by
/// the booking service.
#[derive(Debug, Clone, Default)]
pub struct AppointmentLedger {
    appointments: Vec<Appointment>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from stored appointments, rejecting duplicate ids and
    /// double-booked CONFIRMED slots.
    pub fn restore<I>(appointments: I) -> Result<Self, AppointmentError>
    where
        I: IntoIterator<Item = Appointment>,
    {
        let mut ledger = Self::new();
        let mut seen = HashSet::new();
        for appointment in appointments {
            if !seen.insert(appointment.id) {
                return Err(AppointmentError::ValidationError(format!(
                    "Duplicate appointment id {}",
                    appointment.id
                )));
            }
            ledger.append(appointment)?;
        }
        debug!("Restored {} appointments", ledger.len());
        Ok(ledger)
    }

    pub(crate) fn append(&mut self, appointment: Appointment) -> Result<(), AppointmentError> {
        if appointment.is_confirmed()
            && self.is_slot_taken(&appointment.doctor_id, appointment.time_slot)
        {
            return Err(AppointmentError::ValidationError(format!(
                "Doctor {} already has a confirmed appointment at {}",
                appointment.doctor_id, appointment.time_slot
            )));
        }
        self.appointments.push(appointment);
        Ok(())
    }

    pub(crate) fn set_status(
        &mut self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<&Appointment, AppointmentError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppointmentError::AppointmentNotFound(id.to_string()))?;
        appointment.status = status;
        Ok(appointment)
    }

    pub fn get(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Lookup by the textual id a caller typed in.
    pub fn find_by_id(&self, id: &str) -> Result<&Appointment, AppointmentError> {
        require_id(id, "Appointment ID")?;
        Uuid::parse_str(id.trim())
            .ok()
            .and_then(|uuid| self.get(uuid))
            .ok_or_else(|| AppointmentError::AppointmentNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Copy of every appointment, in booking order.
    pub fn all(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    pub fn for_doctor<'a>(&'a self, doctor_id: &'a str) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.appointments.iter().filter(move |a| a.doctor_id == doctor_id)
    }

    pub fn for_patient<'a>(&'a self, patient_id: &'a str) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.appointments.iter().filter(move |a| a.patient_id == patient_id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl SlotLedger for AppointmentLedger {
    fn is_slot_taken(&self, doctor_id: &str, slot: NaiveDateTime) -> bool {
        self.for_doctor(doctor_id)
            .filter(|a| a.is_confirmed())
            .any(|a| a.time_slot == slot)
    }
}
