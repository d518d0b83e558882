use std::collections::BTreeMap;

use tracing::debug;

use crate::error::AppError;
use crate::profile::{require_id, Profile};

/// Id-keyed profile store.
///
/// Iteration is always in ascending id order. Every "first match" lookup
/// (ambiguous names, ages) resolves against that order, so results never
/// depend on insertion history.
#[derive(Debug, Clone)]
pub struct Directory<P: Profile> {
    entries: BTreeMap<String, P>,
}

impl<P: Profile> Default for Directory<P> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<P: Profile> Directory<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<I>(profiles: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = P>,
    {
        let mut directory = Self::new();
        for profile in profiles {
            directory.register(profile)?;
        }
        Ok(directory)
    }

    /// Validates and stores a profile. A profile with an already known id
    /// replaces the old one, which is returned.
    pub fn register(&mut self, profile: P) -> Result<Option<P>, AppError> {
        profile.validate()?;
        let id = profile.id().to_string();
        let previous = self.entries.insert(id.clone(), profile);
        if previous.is_some() {
            debug!("Replaced {} profile {}", P::KIND, id);
        }
        Ok(previous)
    }

    /// Removes and returns the profile with exactly this id.
    pub fn remove(&mut self, id: &str) -> Result<P, AppError> {
        require_id(id, &format!("{} id", P::KIND))?;
        let removed = self
            .entries
            .remove(id)
            .ok_or_else(|| AppError::not_found(P::KIND, id))?;
        debug!("Removed {} profile {}", P::KIND, id);
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.entries.values()
    }

    pub fn find_by_id(&self, id: &str) -> Result<&P, AppError> {
        require_id(id, &format!("{} id", P::KIND))?;
        self.entries
            .get(id)
            .ok_or_else(|| AppError::not_found(P::KIND, id))
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> Result<&P, AppError> {
        require_id(name, &format!("{} name", P::KIND))?;
        let wanted = name.to_lowercase();
        self.iter()
            .find(|profile| profile.name().to_lowercase() == wanted)
            .ok_or_else(|| AppError::not_found(P::KIND, name))
    }

    pub fn find_by_age(&self, age: u32) -> Result<&P, AppError> {
        self.iter()
            .find(|profile| profile.age() == Some(age))
            .ok_or_else(|| AppError::not_found(P::KIND, format!("age {}", age)))
    }

    /// Exact id first, then case-insensitive name.
    pub fn resolve(&self, identifier: &str) -> Result<&P, AppError> {
        require_id(identifier, &format!("{} identifier", P::KIND))?;
        if let Some(profile) = self.entries.get(identifier) {
            return Ok(profile);
        }
        debug!("No {} with id {}, trying name", P::KIND, identifier);
        self.find_by_name(identifier)
    }
}
