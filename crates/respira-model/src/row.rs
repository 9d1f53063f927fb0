//! Patient input rows
//!
//! One row is a complete set of the 23 feature values for a single
//! prediction. Rows are built per request, validated at construction, and
//! discarded after use.

use respira_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::schema::{FEATURE_COUNT, FEATURE_NAMES, VALUE_MAX, VALUE_MIN};

/// A complete set of feature values for one prediction.
///
/// Field order matches the declared feature order in
/// [`FEATURE_NAMES`](crate::schema::FEATURE_NAMES). Deserialization rejects
/// unknown and missing fields, so a row that parses is structurally
/// complete; call [`validate`](Self::validate) to check the value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientInputRow {
    pub age: f64,
    pub gender: f64,
    pub air_pollution: f64,
    pub alcohol_use: f64,
    pub dust_allergy: f64,
    pub occupational_hazards: f64,
    pub genetic_risk: f64,
    pub chronic_lung_disease: f64,
    pub balanced_diet: f64,
    pub obesity: f64,
    pub smoking: f64,
    pub passive_smoker: f64,
    pub chest_pain: f64,
    pub coughing_of_blood: f64,
    pub fatigue: f64,
    pub weight_loss: f64,
    pub shortness_of_breath: f64,
    pub wheezing: f64,
    pub swallowing_difficulty: f64,
    pub clubbing_of_fingernails: f64,
    pub frequent_cold: f64,
    pub dry_cough: f64,
    pub snoring: f64,
}

impl PatientInputRow {
    /// Build a row from values in declared feature order, validating bounds
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self> {
        let row = Self {
            age: values[0],
            gender: values[1],
            air_pollution: values[2],
            alcohol_use: values[3],
            dust_allergy: values[4],
            occupational_hazards: values[5],
            genetic_risk: values[6],
            chronic_lung_disease: values[7],
            balanced_diet: values[8],
            obesity: values[9],
            smoking: values[10],
            passive_smoker: values[11],
            chest_pain: values[12],
            coughing_of_blood: values[13],
            fatigue: values[14],
            weight_loss: values[15],
            shortness_of_breath: values[16],
            wheezing: values[17],
            swallowing_difficulty: values[18],
            clubbing_of_fingernails: values[19],
            frequent_cold: values[20],
            dry_cough: values[21],
            snoring: values[22],
        };
        row.validate()?;
        Ok(row)
    }

    /// Feature values in declared feature order
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.gender,
            self.air_pollution,
            self.alcohol_use,
            self.dust_allergy,
            self.occupational_hazards,
            self.genetic_risk,
            self.chronic_lung_disease,
            self.balanced_diet,
            self.obesity,
            self.smoking,
            self.passive_smoker,
            self.chest_pain,
            self.coughing_of_blood,
            self.fatigue,
            self.weight_loss,
            self.shortness_of_breath,
            self.wheezing,
            self.swallowing_difficulty,
            self.clubbing_of_fingernails,
            self.frequent_cold,
            self.dry_cough,
            self.snoring,
        ]
    }

    /// Check every value is finite and within the accepted bound
    pub fn validate(&self) -> Result<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(Error::input(format!("{} is not a finite number", name)));
            }
            if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
                return Err(Error::input(format!(
                    "{} must be between {} and {}, got {}",
                    name, VALUE_MIN, VALUE_MAX, value
                )));
            }
        }
        Ok(())
    }
}
