use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use shared_models::profile::validate_identity;
use shared_models::{AppError, EntityKind, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Cardiologist,
    Neurologist,
    Dentist,
    Dermatologist,
    Gastroenterologist,
    Pulmonologist,
    Otolaryngologist,
    Urologist,
    Maxillofacial,
    Rheumatologist,
    Pathologist,
    GeneralPractitioner,
}

impl Specialty {
    pub const ALL: [Specialty; 12] = [
        Specialty::Cardiologist,
        Specialty::Neurologist,
        Specialty::Dentist,
        Specialty::Dermatologist,
        Specialty::Gastroenterologist,
        Specialty::Pulmonologist,
        Specialty::Otolaryngologist,
        Specialty::Urologist,
        Specialty::Maxillofacial,
        Specialty::Rheumatologist,
        Specialty::Pathologist,
        Specialty::GeneralPractitioner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "CARDIOLOGIST",
            Specialty::Neurologist => "NEUROLOGIST",
            Specialty::Dentist => "DENTIST",
            Specialty::Dermatologist => "DERMATOLOGIST",
            Specialty::Gastroenterologist => "GASTROENTEROLOGIST",
            Specialty::Pulmonologist => "PULMONOLOGIST",
            Specialty::Otolaryngologist => "OTOLARYNGOLOGIST",
            Specialty::Urologist => "UROLOGIST",
            Specialty::Maxillofacial => "MAXILLOFACIAL",
            Specialty::Rheumatologist => "RHEUMATOLOGIST",
            Specialty::Pathologist => "PATHOLOGIST",
            Specialty::GeneralPractitioner => "GENERAL_PRACTITIONER",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = AppError;

    /// Accepts the tag in any case, with spaces or dashes in place of
    /// underscores ("general practitioner", "General-Practitioner").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        Specialty::ALL
            .iter()
            .copied()
            .find(|specialty| specialty.as_str() == normalized)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown specialty: {}", s.trim())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
}

impl WorkingHours {
    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime) -> Result<Self, AppError> {
        let hours = Self { opens_at, closes_at };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.closes_at <= self.opens_at {
            return Err(AppError::ValidationFailure(format!(
                "Available time range is invalid: {} - {}",
                self.opens_at, self.closes_at
            )));
        }
        Ok(())
    }
}

pub fn default_working_days() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    /// Sorted Monday-first, no duplicates.
    pub working_days: Vec<Weekday>,
    pub working_hours: WorkingHours,
    pub age: Option<u32>,
}

impl DoctorProfile {
    /// New profile working Monday to Friday.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialty: Specialty,
        working_hours: WorkingHours,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty,
            working_days: default_working_days(),
            working_hours,
            age: None,
        }
    }

    pub fn with_working_days<I>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(|day| day.num_days_from_monday());
        days.dedup();
        self.working_days = days;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn works_on(&self, day: Weekday) -> bool {
        self.working_days.contains(&day)
    }
}

impl Profile for DoctorProfile {
    const KIND: EntityKind = EntityKind::Doctor;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> Option<u32> {
        self.age
    }

    fn validate(&self) -> Result<(), AppError> {
        validate_identity(self)?;
        self.working_hours.validate()?;
        if self.working_days.is_empty() {
            return Err(AppError::ValidationFailure(format!(
                "Doctor {} must have at least one available day",
                self.id
            )));
        }
        Ok(())
    }
}

impl fmt::Display for DoctorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor [ID={}, Name={}, Type={}, Hours={}-{}]",
            self.id,
            self.name,
            self.specialty,
            self.working_hours.opens_at.format("%H:%M"),
            self.working_hours.closes_at.format("%H:%M")
        )
    }
}
