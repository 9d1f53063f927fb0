//! Canned advisory text shown with each verdict
//!
//! Two fixed blocks, selected by the predicted class. No further branching.

use respira_core::RiskClass;

const HIGH_RISK_ADVICE: &[&str] = &[
    "Consult a pulmonologist immediately.",
    "Avoid allergens like dust, smoke, and pollen.",
    "Use air purifiers at home.",
    "Monitor peak flow rate (PEFR) regularly.",
    "Maintain a symptom diary to identify triggers.",
    "Practice yoga and breathing techniques.",
];

const LOW_RISK_ADVICE: &[&str] = &[
    "Stay active with regular exercise.",
    "Follow a balanced diet rich in fruits and vegetables.",
    "Avoid smoking and secondhand smoke.",
    "Practice deep breathing regularly.",
    "Schedule annual respiratory checkups.",
];

/// Advisory block for a predicted class
pub fn advice_for(class: RiskClass) -> &'static [&'static str] {
    match class {
        RiskClass::HighRisk => HIGH_RISK_ADVICE,
        RiskClass::LowRisk => LOW_RISK_ADVICE,
    }
}

/// Heading shown above the advisory block
pub fn advice_heading(class: RiskClass) -> &'static str {
    match class {
        RiskClass::HighRisk => "Detailed Suggestions",
        RiskClass::LowRisk => "Health Maintenance Tips",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_class_has_its_own_block() {
        assert_eq!(advice_for(RiskClass::HighRisk).len(), 6);
        assert_eq!(advice_for(RiskClass::LowRisk).len(), 5);
        assert_ne!(
            advice_heading(RiskClass::HighRisk),
            advice_heading(RiskClass::LowRisk)
        );
    }
}
