//! Advisory text generation
//!
//! Produces the user-facing guidance attached to every report: a referral
//! advisory for the severity tier, and a caution when the model's
//! confidence falls below the configured threshold. A low confidence never
//! blocks the report; the caution only qualifies it.

use crate::triage::severity::SeverityTier;

/// Default confidence threshold below which a caution is attached
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Referral advisory for a severity tier
pub fn advisory_for(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::High => "Severe condition indicated. Seek hospital care promptly.",
        SeverityTier::Low => "Mild condition indicated. A clinic visit should be sufficient.",
        SeverityTier::Moderate => "Condition not graded. Consult a physician for guidance.",
    }
}

/// True if the confidence falls below the caution threshold
pub fn is_low_confidence(confidence: f32, threshold: f32) -> bool {
    confidence < threshold
}

/// Caution attached to reports with low prediction confidence
pub fn low_confidence_caution(confidence: f32) -> String {
    format!(
        "Low prediction confidence ({:.0}%). Treat this result as a rough indication only.",
        confidence * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_distinct_advisory() {
        let high = advisory_for(SeverityTier::High);
        let low = advisory_for(SeverityTier::Low);
        let moderate = advisory_for(SeverityTier::Moderate);

        assert!(high.contains("hospital"));
        assert!(low.contains("clinic"));
        assert!(moderate.contains("physician"));
        assert_ne!(high, low);
        assert_ne!(low, moderate);
    }

    #[test]
    fn test_low_confidence_threshold_is_exclusive() {
        assert!(is_low_confidence(0.35, DEFAULT_LOW_CONFIDENCE_THRESHOLD));
        assert!(is_low_confidence(0.49, DEFAULT_LOW_CONFIDENCE_THRESHOLD));
        assert!(!is_low_confidence(0.5, DEFAULT_LOW_CONFIDENCE_THRESHOLD));
        assert!(!is_low_confidence(0.82, DEFAULT_LOW_CONFIDENCE_THRESHOLD));
    }

    #[test]
    fn test_caution_mentions_percentage() {
        let caution = low_confidence_caution(0.35);
        assert!(caution.contains("35%"));
    }
}
