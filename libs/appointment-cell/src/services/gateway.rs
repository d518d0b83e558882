use anyhow::Result;
use serde::{Deserialize, Serialize};

use doctor_cell::models::DoctorProfile;
use patient_cell::models::PatientProfile;

use crate::models::Appointment;

/// Storage seam. Implementations own the record format; the scheduling core
/// only sees profiles and appointments.
#[cfg_attr(test, mockall::automock)]
pub trait RecordGateway {
    fn load_doctors(&self) -> Result<Vec<DoctorProfile>>;

    fn load_patients(&self) -> Result<Vec<PatientProfile>>;

    fn load_appointments(&self) -> Result<Vec<Appointment>> {
        Ok(Vec::new())
    }
}

/// Id-deduplicated view of everything the clinic holds, for persisting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClinicSnapshot {
    pub doctors: Vec<DoctorProfile>,
    pub patients: Vec<PatientProfile>,
    pub appointments: Vec<Appointment>,
}

/// Gateway over records already in memory, e.g. a seeded roster or a
/// snapshot read back by the caller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    doctors: Vec<DoctorProfile>,
    patients: Vec<PatientProfile>,
    appointments: Vec<Appointment>,
}

impl InMemoryGateway {
    pub fn new(doctors: Vec<DoctorProfile>, patients: Vec<PatientProfile>) -> Self {
        Self {
            doctors,
            patients,
            appointments: Vec::new(),
        }
    }

    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self
    }
}

impl From<ClinicSnapshot> for InMemoryGateway {
    fn from(snapshot: ClinicSnapshot) -> Self {
        Self {
            doctors: snapshot.doctors,
            patients: snapshot.patients,
            appointments: snapshot.appointments,
        }
    }
}

impl RecordGateway for InMemoryGateway {
    fn load_doctors(&self) -> Result<Vec<DoctorProfile>> {
        Ok(self.doctors.clone())
    }

    fn load_patients(&self) -> Result<Vec<PatientProfile>> {
        Ok(self.patients.clone())
    }

    fn load_appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.clone())
    }
}
