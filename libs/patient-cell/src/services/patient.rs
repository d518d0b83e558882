use tracing::{debug, info};

use shared_models::{AppError, Directory};

use crate::models::PatientProfile;

#[derive(Debug, Clone, Default)]
pub struct PatientService {
    patients: Directory<PatientProfile>,
}

impl PatientService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<I>(profiles: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = PatientProfile>,
    {
        let patients = Directory::from_profiles(profiles)?;
        debug!("Loaded {} patients", patients.len());
        Ok(Self { patients })
    }

    pub fn add_patient(&mut self, patient: PatientProfile) -> Result<Option<PatientProfile>, AppError> {
        info!("Registering {}", patient);
        self.patients.register(patient)
    }

    pub fn remove_patient(&mut self, mrn: &str) -> Result<PatientProfile, AppError> {
        let removed = self.patients.remove(mrn)?;
        info!("Removed {}", removed);
        Ok(removed)
    }

    pub fn find_by_id(&self, mrn: &str) -> Result<&PatientProfile, AppError> {
        self.patients.find_by_id(mrn)
    }

    pub fn find_by_name(&self, name: &str) -> Result<&PatientProfile, AppError> {
        self.patients.find_by_name(name)
    }

    pub fn find_by_age(&self, age: u32) -> Result<&PatientProfile, AppError> {
        self.patients.find_by_age(age)
    }

    pub fn resolve(&self, identifier: &str) -> Result<&PatientProfile, AppError> {
        self.patients.resolve(identifier)
    }

    pub fn patients(&self) -> impl Iterator<Item = &PatientProfile> {
        self.patients.iter()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
