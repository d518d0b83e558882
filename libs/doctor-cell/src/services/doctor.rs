use tracing::{debug, info};

use shared_models::{AppError, Directory};

use crate::models::{DoctorProfile, Specialty};

/// Owns the registered doctors. Everything outside this service reads
/// profiles through shared references only.
#[derive(Debug, Clone, Default)]
pub struct DoctorService {
    doctors: Directory<DoctorProfile>,
}

impl DoctorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<I>(profiles: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = DoctorProfile>,
    {
        let doctors = Directory::from_profiles(profiles)?;
        debug!("Loaded {} doctors", doctors.len());
        Ok(Self { doctors })
    }

    pub fn add_doctor(&mut self, doctor: DoctorProfile) -> Result<Option<DoctorProfile>, AppError> {
        info!("Registering {}", doctor);
        self.doctors.register(doctor)
    }

    /// Takes the doctor out of the directory. Appointments already in the
    /// ledger keep their doctor id.
    pub fn remove_doctor(&mut self, id: &str) -> Result<DoctorProfile, AppError> {
        let removed = self.doctors.remove(id)?;
        info!("Removed {}", removed);
        Ok(removed)
    }

    /// Exact id first, then case-insensitive name.
    pub fn resolve(&self, identifier: &str) -> Result<&DoctorProfile, AppError> {
        self.doctors.resolve(identifier)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&DoctorProfile, AppError> {
        self.doctors.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> Result<&DoctorProfile, AppError> {
        self.doctors.find_by_name(name)
    }

    pub fn find_by_age(&self, age: u32) -> Result<&DoctorProfile, AppError> {
        self.doctors.find_by_age(age)
    }

    /// Doctors of one specialty in ascending id order.
    pub fn doctors_by_specialty(&self, specialty: Specialty) -> Vec<&DoctorProfile> {
        self.doctors
            .iter()
            .filter(|doctor| doctor.specialty == specialty)
            .collect()
    }

    pub fn doctors(&self) -> impl Iterator<Item = &DoctorProfile> {
        self.doctors.iter()
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
