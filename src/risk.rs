//! Risk score, tier mapping, and tier presentation.
//!
//! The tier is purely derived from the score — it is never stored on its
//! own, and no states beyond Low/Medium/High exist.

use serde::{Deserialize, Serialize};

/// Tier boundaries (half-open on the lower bound): a score of 30 is
/// Medium, 65 is High.
const MEDIUM_THRESHOLD: u8 = 30;
const HIGH_THRESHOLD: u8 = 65;

/// Integer risk percentage in [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Builds a score from a model probability in [0,1]:
    /// `round(p * 100)`, clamped so the integer invariant always holds.
    pub fn from_probability(probability: f64) -> Self {
        let pct = (probability * 100.0).round().clamp(0.0, 100.0);
        Self(pct as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Needle rotation in degrees for the semicircular gauge:
    /// 0 → 0°, 100 → 180°.
    pub fn gauge_rotation(self) -> f64 {
        f64::from(self.0) / 100.0 * 180.0
    }
}

/// Coarse risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: RiskScore) -> Self {
        if score.value() < MEDIUM_THRESHOLD {
            RiskTier::Low
        } else if score.value() < HIGH_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    pub fn presentation(self) -> &'static RiskPresentation {
        match self {
            RiskTier::Low => &LOW_PRESENTATION,
            RiskTier::Medium => &MEDIUM_PRESENTATION,
            RiskTier::High => &HIGH_PRESENTATION,
        }
    }
}

/// Tier-specific display bundle — title, body text, icon id, severity token.
#[derive(Debug, Clone, Serialize)]
pub struct RiskPresentation {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub severity: &'static str,
}

static LOW_PRESENTATION: RiskPresentation = RiskPresentation {
    title: "Low Risk",
    description: "Based on your inputs, you have a relatively low risk of developing diabetes. Keep maintaining healthy lifestyle habits.",
    icon: "fas fa-shield-alt",
    severity: "success",
};

static MEDIUM_PRESENTATION: RiskPresentation = RiskPresentation {
    title: "Moderate Risk",
    description: "Your assessment indicates a moderate risk for diabetes. Consider lifestyle improvements and regular health monitoring.",
    icon: "fas fa-exclamation-triangle",
    severity: "warning",
};

static HIGH_PRESENTATION: RiskPresentation = RiskPresentation {
    title: "High Risk",
    description: "Your results suggest a higher risk for diabetes. We strongly recommend consulting with a healthcare professional for proper evaluation.",
    icon: "fas fa-exclamation-circle",
    severity: "error",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(score: u8) -> RiskTier {
        RiskTier::from_score(RiskScore::from_probability(f64::from(score) / 100.0))
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier(0), RiskTier::Low);
        assert_eq!(tier(29), RiskTier::Low);
        assert_eq!(tier(30), RiskTier::Medium);
        assert_eq!(tier(64), RiskTier::Medium);
        assert_eq!(tier(65), RiskTier::High);
        assert_eq!(tier(100), RiskTier::High);
    }

    #[test]
    fn probability_rounds_to_nearest_percent() {
        assert_eq!(RiskScore::from_probability(0.15).value(), 15);
        assert_eq!(RiskScore::from_probability(0.154).value(), 15);
        assert_eq!(RiskScore::from_probability(0.155).value(), 16);
        assert_eq!(RiskScore::from_probability(0.8).value(), 80);
    }

    #[test]
    fn probability_extremes_clamp_to_range() {
        assert_eq!(RiskScore::from_probability(0.0).value(), 0);
        assert_eq!(RiskScore::from_probability(1.0).value(), 100);
        assert_eq!(RiskScore::from_probability(1.004).value(), 100);
    }

    #[test]
    fn gauge_rotation_is_linear_over_half_circle() {
        assert!((RiskScore::from_probability(0.0).gauge_rotation() - 0.0).abs() < f64::EPSILON);
        assert!((RiskScore::from_probability(0.5).gauge_rotation() - 90.0).abs() < f64::EPSILON);
        assert!((RiskScore::from_probability(1.0).gauge_rotation() - 180.0).abs() < f64::EPSILON);
        assert!((RiskScore::from_probability(0.35).gauge_rotation() - 63.0).abs() < 1e-9);
    }

    #[test]
    fn presentation_matches_tier() {
        assert_eq!(RiskTier::Low.presentation().title, "Low Risk");
        assert_eq!(RiskTier::Low.presentation().severity, "success");
        assert_eq!(RiskTier::Medium.presentation().title, "Moderate Risk");
        assert_eq!(RiskTier::Medium.presentation().icon, "fas fa-exclamation-triangle");
        assert_eq!(RiskTier::High.presentation().title, "High Risk");
        assert_eq!(RiskTier::High.presentation().severity, "error");
    }

    #[test]
    fn tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RiskTier::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&RiskTier::High).unwrap(), "\"high\"");
    }

    #[test]
    fn score_serializes_as_bare_number() {
        let json = serde_json::to_string(&RiskScore::from_probability(0.42)).unwrap();
        assert_eq!(json, "42");
    }
}
