#![allow(dead_code)]

use std::sync::Arc;

use chrono::Weekday;

use appointment_cell::services::{AppointmentBookingService, ClinicContext};
use doctor_cell::models::{DoctorProfile, Specialty, WorkingHours};
use doctor_cell::services::DoctorService;
use patient_cell::models::PatientProfile;
use patient_cell::services::PatientService;
use shared_utils::clock::FixedClock;
use shared_utils::test_utils::{time_of_day, TestConfig};

pub fn hours(open: (u32, u32), close: (u32, u32)) -> WorkingHours {
    WorkingHours::new(time_of_day(open.0, open.1), time_of_day(close.0, close.1)).unwrap()
}

pub fn doctor(id: &str, name: &str, specialty: Specialty, open: (u32, u32), close: (u32, u32)) -> DoctorProfile {
    DoctorProfile::new(id, name, specialty, hours(open, close))
}

/// Cardiology, two neurologists with different hours and a morning dentist.
pub fn roster() -> Vec<DoctorProfile> {
    vec![
        doctor("D1", "Dr. Strange", Specialty::Cardiologist, (9, 0), (17, 0)),
        doctor("D2", "Dr. House", Specialty::Neurologist, (14, 0), (22, 0)),
        doctor("D3", "Dr. Crentist", Specialty::Dentist, (8, 0), (12, 0)),
        doctor("D4", "Dr. Shepherd", Specialty::Neurologist, (9, 0), (17, 0)),
    ]
}

pub fn patients() -> Vec<PatientProfile> {
    vec![
        PatientProfile::new("MRN-001", "Tony Stark").with_age(45),
        PatientProfile::new("MRN-002", "Natasha Romanoff").with_age(35),
    ]
}

pub fn context_with(doctors: Vec<DoctorProfile>) -> ClinicContext {
    ClinicContext::new(
        DoctorService::from_profiles(doctors).unwrap(),
        PatientService::from_profiles(patients()).unwrap(),
    )
}

pub fn context() -> ClinicContext {
    context_with(roster())
}

pub fn booking_service(clock: FixedClock) -> AppointmentBookingService {
    AppointmentBookingService::new(&TestConfig::default().to_app_config(), Arc::new(clock))
}

pub fn booking_service_with(clock: FixedClock, config: TestConfig) -> AppointmentBookingService {
    AppointmentBookingService::new(&config.to_app_config(), Arc::new(clock))
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}
