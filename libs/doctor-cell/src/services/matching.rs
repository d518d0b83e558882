use tracing::debug;

use crate::models::{DoctorProfile, Specialty};
use crate::services::doctor::DoctorService;

/// Keyword groups checked in order; the first group with a keyword contained
/// in the lowercased symptom text decides the specialty.
const KEYWORD_GROUPS: &[(&[&str], Specialty)] = &[
    (&["heart", "cardio"], Specialty::Cardiologist),
    (&["brain", "neuro"], Specialty::Neurologist),
    (&["tooth", "dental"], Specialty::Dentist),
    (&["skin", "rash"], Specialty::Dermatologist),
    (&["stomach", "digestion", "gut"], Specialty::Gastroenterologist),
    (&["lung", "breath", "respiratory"], Specialty::Pulmonologist),
    (&["ear", "nose", "throat"], Specialty::Otolaryngologist),
    (&["urine", "kidney", "bladder"], Specialty::Urologist),
    (&["jaw", "face", "maxillofacial"], Specialty::Maxillofacial),
    (&["joint", "arthritis", "rheumatism"], Specialty::Rheumatologist),
    (&["blood", "lab", "test"], Specialty::Pathologist),
];

/// Plain substring heuristic from symptom text to a specialty.
///
/// Matching is deliberately naive: "ear" also hits "year" or "fear", and a
/// text naming several organs goes to whichever group is listed first.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecialtyMatcher;

impl SpecialtyMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn map_symptom(&self, symptom: &str) -> Specialty {
        let symptom = symptom.to_lowercase();
        let specialty = KEYWORD_GROUPS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| symptom.contains(keyword)))
            .map(|(_, specialty)| *specialty)
            .unwrap_or(Specialty::GeneralPractitioner);

        debug!("Mapped symptom {:?} to {}", symptom, specialty);
        specialty
    }

    /// First registered doctor (lowest id) of the specialty the symptom maps to.
    pub fn suggest_doctor<'a>(
        &self,
        symptom: &str,
        doctors: &'a DoctorService,
    ) -> Option<&'a DoctorProfile> {
        let specialty = self.map_symptom(symptom);
        doctors.doctors_by_specialty(specialty).into_iter().next()
    }
}
