pub mod booking;
pub mod context;
pub mod gateway;
pub mod ledger;
pub mod lifecycle;

pub use booking::AppointmentBookingService;
pub use context::{ClinicContext, SharedClinic};
pub use gateway::{ClinicSnapshot, InMemoryGateway, RecordGateway};
pub use ledger::AppointmentLedger;
pub use lifecycle::AppointmentLifecycleService;
