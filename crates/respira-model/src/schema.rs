//! The fixed feature schema expected by the asthma risk model
//!
//! The model declares 23 named input features. The order here is the order
//! the model declares and must match [`PatientInputRow`] field order.
//!
//! [`PatientInputRow`]: crate::row::PatientInputRow

use serde::Serialize;

/// Number of input features the model expects
pub const FEATURE_COUNT: usize = 23;

/// Lower bound accepted for every feature value
pub const VALUE_MIN: f64 = 0.0;

/// Upper bound accepted for every feature value
pub const VALUE_MAX: f64 = 1000.0;

/// Canonical feature names, in declared order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "air_pollution",
    "alcohol_use",
    "dust_allergy",
    "occupational_hazards",
    "genetic_risk",
    "chronic_lung_disease",
    "balanced_diet",
    "obesity",
    "smoking",
    "passive_smoker",
    "chest_pain",
    "coughing_of_blood",
    "fatigue",
    "weight_loss",
    "shortness_of_breath",
    "wheezing",
    "swallowing_difficulty",
    "clubbing_of_fingernails",
    "frequent_cold",
    "dry_cough",
    "snoring",
];

/// Human-readable labels for each feature position.
///
/// Most indicators are 0/1 flags despite the shared numeric bound.
const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "Age (years)",
    "Gender (0=Female, 1=Male)",
    "Air Pollution Level",
    "Alcohol Use (0/1)",
    "Dust Allergy (0/1)",
    "Occupational Hazards (0/1)",
    "Genetic Risk (0/1)",
    "Chronic Lung Disease (0/1)",
    "Balanced Diet (0/1)",
    "Obesity (0/1)",
    "Smoking (0/1)",
    "Passive Smoker (0/1)",
    "Chest Pain (0/1)",
    "Coughing of Blood (0/1)",
    "Fatigue (0/1)",
    "Weight Loss (0/1)",
    "Shortness of Breath (0/1)",
    "Wheezing (0/1)",
    "Swallowing Difficulty (0/1)",
    "Clubbing of Fingernails (0/1)",
    "Frequent Cold (0/1)",
    "Dry Cough (0/1)",
    "Snoring (0/1)",
];

/// Label for a feature position, if one exists
pub fn label_for(position: usize) -> Option<&'static str> {
    FEATURE_LABELS.get(position).copied()
}

/// One renderable form field
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Canonical feature name, as declared by the model
    pub name: String,

    /// Display label; falls back to the raw feature name
    pub label: String,

    /// Minimum accepted value
    pub min: f64,

    /// Maximum accepted value
    pub max: f64,

    /// Initial form value
    pub default: f64,
}

/// Build the form field descriptors for a model's declared feature list.
///
/// Positions with a known label use it; anything past the label table (or a
/// renamed feature) falls back to the raw name so the form still renders.
pub fn form_fields(feature_names: &[String]) -> Vec<FieldDescriptor> {
    feature_names
        .iter()
        .enumerate()
        .map(|(i, name)| FieldDescriptor {
            name: name.clone(),
            label: label_for(i).unwrap_or(name.as_str()).to_string(),
            min: VALUE_MIN,
            max: VALUE_MAX,
            default: 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_23_features() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_COUNT, 23);
    }

    #[test]
    fn every_position_has_a_label() {
        for i in 0..FEATURE_COUNT {
            assert!(label_for(i).is_some(), "missing label for position {}", i);
        }
        assert!(label_for(FEATURE_COUNT).is_none());
    }

    #[test]
    fn form_fields_fall_back_to_raw_names() {
        let names: Vec<String> = FEATURE_NAMES
            .iter()
            .map(|n| n.to_string())
            .chain(std::iter::once("extra_marker".to_string()))
            .collect();

        let fields = form_fields(&names);
        assert_eq!(fields.len(), FEATURE_COUNT + 1);
        assert_eq!(fields[0].label, "Age (years)");
        assert_eq!(fields[FEATURE_COUNT].label, "extra_marker");
        assert!(fields.iter().all(|f| f.default == 0.0));
    }
}
