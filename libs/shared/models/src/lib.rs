pub mod directory;
pub mod error;
pub mod profile;

pub use directory::Directory;
pub use error::{AppError, EntityKind};
pub use profile::{require_id, Profile};
