//! Recommendation selection — base guidance, tier-specific advice, and
//! threshold-triggered personalized tips.
//!
//! Ordering is significant and fixed: base items first, then tier items,
//! then personalized tips, in catalog order. Nothing is deduplicated, and
//! triggers are evaluated on the full set — only display is capped.

use serde::{Deserialize, Serialize};

use crate::form::AssessmentInput;
use crate::risk::RiskTier;

/// How many recommendations the results list shows.
pub const DISPLAY_LIMIT: usize = 6;

/// Tips shown for every assessment, regardless of tier.
const BASE_RECOMMENDATIONS: &[&str] = &[
    "Maintain a balanced diet rich in vegetables, fruits, and whole grains",
    "Engage in regular physical activity - aim for 150 minutes per week",
    "Monitor your weight and maintain a healthy BMI",
    "Get regular health checkups and screenings",
];

const LOW_RECOMMENDATIONS: &[&str] = &[
    "Continue your current healthy lifestyle",
    "Stay hydrated and limit sugary drinks",
    "Get adequate sleep (7-9 hours per night)",
    "Manage stress through relaxation techniques",
];

const MEDIUM_RECOMMENDATIONS: &[&str] = &[
    "Consider consulting with a nutritionist for meal planning",
    "Increase physical activity gradually if currently sedentary",
    "Monitor blood glucose levels more frequently",
    "Limit processed foods and refined sugars",
    "Consider joining a diabetes prevention program",
];

const HIGH_RECOMMENDATIONS: &[&str] = &[
    "Schedule an appointment with your healthcare provider immediately",
    "Consider professional dietary counseling",
    "Implement a structured exercise program under medical guidance",
    "Monitor blood pressure and glucose levels regularly",
    "Discuss family history and genetic factors with your doctor",
    "Consider medication if recommended by your healthcare provider",
];

// Personalized tip triggers. The mixed comparison strictness (>= for the
// first three, > for age) is the established product behavior; keep it.
const BMI_TIP_THRESHOLD: f64 = 25.0;
const GLUCOSE_TIP_THRESHOLD: u32 = 100;
const BLOOD_PRESSURE_TIP_THRESHOLD: u32 = 80;
const AGE_TIP_THRESHOLD: u32 = 45;

/// Ordered recommendation list for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    items: Vec<String>,
}

impl RecommendationSet {
    /// The full, untruncated list in selection order.
    pub fn all(&self) -> &[String] {
        &self.items
    }

    /// The first six items, as shown in the results list.
    pub fn display(&self) -> &[String] {
        &self.items[..self.items.len().min(DISPLAY_LIMIT)]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn tier_recommendations(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::Low => LOW_RECOMMENDATIONS,
        RiskTier::Medium => MEDIUM_RECOMMENDATIONS,
        RiskTier::High => HIGH_RECOMMENDATIONS,
    }
}

fn personalized_tips(input: &AssessmentInput) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if input.bmi >= BMI_TIP_THRESHOLD {
        tips.push("Focus on gradual, sustainable weight loss");
    }
    if input.glucose >= GLUCOSE_TIP_THRESHOLD {
        tips.push("Pay special attention to carbohydrate intake");
    }
    if input.blood_pressure >= BLOOD_PRESSURE_TIP_THRESHOLD {
        tips.push("Reduce sodium intake and manage blood pressure");
    }
    if input.age > AGE_TIP_THRESHOLD {
        tips.push("Age-related risk requires more frequent health monitoring");
    }
    tips
}

/// Selects the recommendation set for a tier and submission:
/// base ++ tier-specific ++ personalized, insertion order preserved.
pub fn select_recommendations(tier: RiskTier, input: &AssessmentInput) -> RecommendationSet {
    let items = BASE_RECOMMENDATIONS
        .iter()
        .chain(tier_recommendations(tier))
        .map(|s| (*s).to_string())
        .chain(personalized_tips(input).into_iter().map(str::to_string))
        .collect();
    RecommendationSet { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AssessmentInput {
        AssessmentInput {
            pregnancies: 2,
            glucose: 95,
            blood_pressure: 70,
            skin_thickness: 20,
            insulin: 80,
            bmi: 22.0,
            diabetes_pedigree: 0.3,
            age: 30,
        }
    }

    #[test]
    fn base_items_come_first_in_fixed_order() {
        let set = select_recommendations(RiskTier::Low, &input());
        assert_eq!(set.all()[..4], BASE_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn tier_items_follow_base_items() {
        let set = select_recommendations(RiskTier::Medium, &input());
        assert_eq!(set.all()[4], MEDIUM_RECOMMENDATIONS[0]);
        assert_eq!(set.len(), 4 + 5);
    }

    #[test]
    fn no_tips_triggered_below_all_thresholds() {
        let set = select_recommendations(RiskTier::Low, &input());
        assert_eq!(set.len(), 4 + 4);
    }

    #[test]
    fn all_four_tips_triggered_above_thresholds() {
        let mut i = input();
        i.bmi = 31.0;
        i.glucose = 150;
        i.blood_pressure = 90;
        i.age = 50;
        let set = select_recommendations(RiskTier::High, &i);
        assert_eq!(set.len(), 4 + 6 + 4);
        let tail: Vec<&str> = set.all()[10..].iter().map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![
                "Focus on gradual, sustainable weight loss",
                "Pay special attention to carbohydrate intake",
                "Reduce sodium intake and manage blood pressure",
                "Age-related risk requires more frequent health monitoring",
            ],
        );
    }

    #[test]
    fn bmi_and_glucose_and_pressure_triggers_are_inclusive() {
        let mut i = input();
        i.bmi = 25.0;
        i.glucose = 100;
        i.blood_pressure = 80;
        let set = select_recommendations(RiskTier::Low, &i);
        assert_eq!(set.len(), 4 + 4 + 3);

        i.bmi = 24.9;
        i.glucose = 99;
        i.blood_pressure = 79;
        let set = select_recommendations(RiskTier::Low, &i);
        assert_eq!(set.len(), 4 + 4);
    }

    #[test]
    fn age_trigger_is_strict() {
        let mut i = input();
        i.age = 45;
        assert_eq!(select_recommendations(RiskTier::Low, &i).len(), 8);
        i.age = 46;
        assert_eq!(select_recommendations(RiskTier::Low, &i).len(), 9);
    }

    #[test]
    fn display_is_capped_at_six_but_set_is_not() {
        let mut i = input();
        i.bmi = 31.0;
        i.glucose = 150;
        i.blood_pressure = 90;
        i.age = 50;
        let set = select_recommendations(RiskTier::High, &i);
        assert_eq!(set.display().len(), 6);
        assert_eq!(set.len(), 14);
        // Display keeps insertion order from the front.
        assert_eq!(set.display()[0], BASE_RECOMMENDATIONS[0]);
        assert_eq!(set.display()[5], HIGH_RECOMMENDATIONS[1]);
    }

    #[test]
    fn short_sets_display_everything() {
        let set = select_recommendations(RiskTier::Low, &input());
        assert_eq!(set.display().len(), 6);
        let fewer = RecommendationSet {
            items: vec!["one".into(), "two".into()],
        };
        assert_eq!(fewer.display().len(), 2);
    }
}
