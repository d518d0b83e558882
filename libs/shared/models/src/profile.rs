use crate::error::{AppError, EntityKind};

/// Minimal capability shared by everything a [`crate::Directory`] can hold.
pub trait Profile {
    const KIND: EntityKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn age(&self) -> Option<u32>;

    /// Checks the fields every profile needs. Implementors extend this with
    /// their own rules and should call [`validate_identity`] first.
    fn validate(&self) -> Result<(), AppError> {
        validate_identity(self)
    }
}

pub fn validate_identity<P: Profile + ?Sized>(profile: &P) -> Result<(), AppError> {
    if profile.id().trim().is_empty() {
        return Err(AppError::ValidationFailure(format!(
            "{} id cannot be empty",
            P::KIND
        )));
    }
    if profile.name().trim().is_empty() {
        return Err(AppError::ValidationFailure(format!(
            "{} name cannot be empty",
            P::KIND
        )));
    }
    Ok(())
}

/// Rejects empty or whitespace-only identifiers coming from callers.
pub fn require_id<'a>(value: &'a str, what: &str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} cannot be null or empty", what)));
    }
    Ok(value)
}
