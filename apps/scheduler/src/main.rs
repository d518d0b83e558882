use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod seed;

use appointment_cell::models::{BookAppointmentRequest, SpecialtyBookingRequest};
use appointment_cell::services::{AppointmentBookingService, ClinicContext, SharedClinic};
use doctor_cell::models::Specialty;
use shared_config::AppConfig;
use shared_utils::clock::SystemClock;
use shared_utils::time::format_slot;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic scheduler");

    let config = AppConfig::from_env();
    let context = ClinicContext::load(&seed::default_roster()?).context("seeding clinic")?;
    let booking_service = AppointmentBookingService::new(&config, Arc::new(SystemClock));
    let clinic = SharedClinic::new(context, booking_service);

    match clinic.book_appointment(BookAppointmentRequest::new("heart pain", "MRN-001")) {
        Ok(appointment) => info!(
            "Booked {} with {} at {}",
            appointment.patient_id,
            appointment.doctor_id,
            format_slot(&appointment.time_slot)
        ),
        Err(e) => warn!("Symptom booking failed: {}", e),
    }

    match clinic.book_by_specialty(SpecialtyBookingRequest::new(Specialty::Neurologist, "MRN-002")) {
        Ok(appointment) => info!(
            "Auto-matched {} with {} at {}",
            appointment.patient_id,
            appointment.doctor_id,
            format_slot(&appointment.time_slot)
        ),
        Err(e) => warn!("Specialty booking failed: {}", e),
    }

    let snapshot = clinic.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
