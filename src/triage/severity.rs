//! Severity grading
//!
//! Maps a predicted disease label to a referral tier. Grading is data
//! driven: one label→tier map built from the referral tables, instead of
//! membership checks against parallel lists. Hospital entries are inserted
//! last, so hospital wins if a label ever appears in both tables; anything
//! unlisted grades as [`SeverityTier::Moderate`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Referral severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Hospital referral
    High,

    /// Clinic referral
    Low,

    /// Unlisted condition: consult a physician
    Moderate,
}

impl SeverityTier {
    /// Human-readable tier name
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::High => "High",
            SeverityTier::Low => "Low",
            SeverityTier::Moderate => "Moderate",
        }
    }
}

/// Conditions referred directly to a hospital
pub const HOSPITAL_CASES: &[&str] = &[
    "AIDS",
    "Alcoholic hepatitis",
    "Dengue",
    "Heart attack",
    "Hepatitis B",
    "Hepatitis C",
    "Hepatitis D",
    "Hepatitis E",
    "Jaundice",
    "Malaria",
    "Paralysis (brain hemorrhage)",
    "Pneumonia",
    "Tuberculosis",
    "Typhoid",
];

/// Conditions manageable at a clinic
pub const CLINIC_CASES: &[&str] = &[
    "Acne",
    "Allergy",
    "Chicken pox",
    "Common Cold",
    "Drug Reaction",
    "Fungal infection",
    "GERD",
    "Gastroenteritis",
    "Migraine",
    "Psoriasis",
    "Urinary tract infection",
    "Varicose veins",
];

/// Label→tier mapping
#[derive(Debug, Clone)]
pub struct SeverityMap {
    tiers: HashMap<String, SeverityTier>,
}

impl SeverityMap {
    /// Build a map from explicit (label, tier) pairs
    ///
    /// Later pairs win on duplicate labels, which is how the default map
    /// gives hospital entries precedence.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, SeverityTier)>,
    {
        Self {
            tiers: pairs.into_iter().collect(),
        }
    }

    /// Grade a predicted disease label
    ///
    /// Unlisted labels grade as `Moderate`; grading never fails.
    pub fn classify(&self, label: &str) -> SeverityTier {
        self.tiers
            .get(label)
            .copied()
            .unwrap_or(SeverityTier::Moderate)
    }

    /// Number of explicitly graded labels
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// True if no labels are explicitly graded
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for SeverityMap {
    /// Map built from the referral tables, clinic first so hospital wins on
    /// overlap
    fn default() -> Self {
        let clinic = CLINIC_CASES
            .iter()
            .map(|label| (label.to_string(), SeverityTier::Low));
        let hospital = HOSPITAL_CASES
            .iter()
            .map(|label| (label.to_string(), SeverityTier::High));

        Self::from_pairs(clinic.chain(hospital))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hospital_cases_grade_high() {
        let map = SeverityMap::default();
        for label in HOSPITAL_CASES {
            assert_eq!(map.classify(label), SeverityTier::High, "{}", label);
        }
    }

    #[test]
    fn test_clinic_cases_grade_low() {
        let map = SeverityMap::default();
        for label in CLINIC_CASES {
            assert_eq!(map.classify(label), SeverityTier::Low, "{}", label);
        }
    }

    #[test]
    fn test_unlisted_label_grades_moderate() {
        let map = SeverityMap::default();

        assert_eq!(map.classify("Unknown Syndrome"), SeverityTier::Moderate);
        assert_eq!(map.classify(""), SeverityTier::Moderate);
    }

    #[test]
    fn test_label_in_both_tables_grades_high() {
        // Later pairs win, mirroring the default map's insertion order
        let map = SeverityMap::from_pairs(vec![
            ("Dengue".to_string(), SeverityTier::Low),
            ("Dengue".to_string(), SeverityTier::High),
        ]);

        assert_eq!(map.classify("Dengue"), SeverityTier::High);
    }

    #[test]
    fn test_referral_tables_are_disjoint() {
        for label in HOSPITAL_CASES {
            assert!(!CLINIC_CASES.contains(label), "{} listed twice", label);
        }
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(SeverityTier::High.label(), "High");
        assert_eq!(SeverityTier::Low.label(), "Low");
        assert_eq!(SeverityTier::Moderate.label(), "Moderate");
    }
}
