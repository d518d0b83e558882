pub mod doctor;
pub mod availability;
pub mod matching;
pub mod scheduling;

pub use doctor::DoctorService;
pub use availability::{AvailabilityService, SlotLedger};
pub use matching::SpecialtyMatcher;
pub use scheduling::SchedulingService;
