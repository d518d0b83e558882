use anyhow::Result;
use chrono::NaiveTime;

use appointment_cell::services::InMemoryGateway;
use doctor_cell::models::{DoctorProfile, Specialty, WorkingHours};
use patient_cell::models::PatientProfile;

fn hours(opens: u32, closes: u32) -> Result<WorkingHours> {
    let time = |hour: u32| {
        NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| anyhow::anyhow!("invalid hour {}", hour))
    };
    Ok(WorkingHours::new(time(opens)?, time(closes)?)?)
}

/// Default roster used when the scheduler starts without stored records.
pub fn default_roster() -> Result<InMemoryGateway> {
    let doctors = vec![
        DoctorProfile::new("D1", "Dr. Strange", Specialty::Cardiologist, hours(9, 17)?).with_age(45),
        DoctorProfile::new("D2", "Dr. House", Specialty::Neurologist, hours(14, 22)?).with_age(52),
        DoctorProfile::new("D3", "Dr. Crentist", Specialty::Dentist, hours(8, 12)?),
        DoctorProfile::new("D4", "Dr. Shepherd", Specialty::Neurologist, hours(9, 17)?).with_age(41),
    ];
    let patients = vec![
        PatientProfile::new("MRN-001", "Tony Stark").with_age(48),
        PatientProfile::new("MRN-002", "Natasha Romanoff").with_age(35),
    ];
    Ok(InMemoryGateway::new(doctors, patients))
}
