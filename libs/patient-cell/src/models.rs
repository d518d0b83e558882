use std::fmt;

use serde::{Deserialize, Serialize};

use shared_models::{EntityKind, Profile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Medical record number.
    pub mrn: String,
    pub name: String,
    pub age: Option<u32>,
}

impl PatientProfile {
    pub fn new(mrn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mrn: mrn.into(),
            name: name.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

impl Profile for PatientProfile {
    const KIND: EntityKind = EntityKind::Patient;

    fn id(&self) -> &str {
        &self.mrn
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> Option<u32> {
        self.age
    }
}

impl fmt::Display for PatientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient [MRN={}, Name={}]", self.mrn, self.name)
    }
}
