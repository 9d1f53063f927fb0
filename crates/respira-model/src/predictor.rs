//! Predictor trait and the forest-backed implementation

use respira_core::{Error, Result, RiskAssessment, RiskClass};
use std::time::Instant;

use crate::forest::RandomForest;
use crate::row::PatientInputRow;
use crate::schema::FEATURE_NAMES;

/// Interface to a loaded binary risk classifier.
///
/// Implementations are immutable after construction and shared read-only
/// across requests for the process lifetime.
pub trait Predictor: Send + Sync {
    /// Model name
    fn name(&self) -> &str;

    /// Input feature names, in the order the model expects them
    fn feature_names(&self) -> &[String];

    /// Predicted risk class for one row
    fn predict(&self, row: &PatientInputRow) -> Result<RiskClass>;

    /// Per-class probability vector for one row
    fn predict_proba(&self, row: &PatientInputRow) -> Result<Vec<f64>>;

    /// Full assessment: predicted class plus the probability mass assigned
    /// to it, scaled to a percentage.
    fn assess(&self, row: &PatientInputRow) -> Result<RiskAssessment> {
        let start = Instant::now();

        let class = self.predict(row)?;
        let proba = self.predict_proba(row)?;
        let mass = proba.get(class.index()).copied().ok_or_else(|| {
            Error::model("probability vector does not cover the predicted class")
        })?;

        let mut assessment = RiskAssessment::new(class, mass * 100.0, self.name());
        assessment.latency_us = start.elapsed().as_micros() as u64;
        Ok(assessment)
    }
}

/// Predictor backed by a deserialized tree ensemble
#[derive(Debug)]
pub struct ForestPredictor {
    forest: RandomForest,
}

impl ForestPredictor {
    /// Wrap a validated ensemble, checking its declared features against
    /// the fixed row schema.
    ///
    /// Rows are fixed-schema records, so an artifact whose feature list
    /// differs in names or order cannot be served.
    pub fn new(forest: RandomForest) -> Result<Self> {
        forest.validate()?;

        if forest.feature_names.len() != FEATURE_NAMES.len() {
            return Err(Error::artifact(format!(
                "artifact declares {} features, expected {}",
                forest.feature_names.len(),
                FEATURE_NAMES.len()
            )));
        }
        for (i, (declared, expected)) in
            forest.feature_names.iter().zip(FEATURE_NAMES).enumerate()
        {
            if declared.as_str() != expected {
                return Err(Error::artifact(format!(
                    "feature {} is '{}', expected '{}'",
                    i, declared, expected
                )));
            }
        }

        Ok(Self { forest })
    }

    /// Number of trees in the ensemble
    pub fn tree_count(&self) -> usize {
        self.forest.trees.len()
    }
}

impl Predictor for ForestPredictor {
    fn name(&self) -> &str {
        &self.forest.model_name
    }

    fn feature_names(&self) -> &[String] {
        &self.forest.feature_names
    }

    fn predict(&self, row: &PatientInputRow) -> Result<RiskClass> {
        row.validate()?;
        let class = self.forest.predict(&row.values())?;
        RiskClass::from_index(class)
    }

    fn predict_proba(&self, row: &PatientInputRow) -> Result<Vec<f64>> {
        row.validate()?;
        self.forest.predict_proba(&row.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::{Node, Tree, FORMAT_VERSION};

    /// Single-tree ensemble over the full 23-feature schema, splitting on
    /// smoking
    fn schema_forest() -> RandomForest {
        RandomForest {
            format_version: FORMAT_VERSION,
            model_name: "asthma-rf".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            n_classes: 2,
            trees: vec![Tree {
                nodes: vec![
                    Node::Split {
                        feature: 10, // smoking
                        threshold: 0.5,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        class_counts: vec![19, 1],
                    },
                    Node::Leaf {
                        class_counts: vec![1, 3],
                    },
                ],
            }],
        }
    }

    #[test]
    fn predictor_rejects_mismatched_schema() {
        let mut forest = schema_forest();
        forest.feature_names[0] = "years".to_string();

        let err = ForestPredictor::new(forest).unwrap_err();
        assert!(err.to_string().contains("expected 'age'"));
    }

    #[test]
    fn assess_scales_confidence_to_percent() {
        let predictor = ForestPredictor::new(schema_forest()).unwrap();

        let low = PatientInputRow::default();
        let assessment = predictor.assess(&low).unwrap();
        assert_eq!(assessment.class, RiskClass::LowRisk);
        assert!((assessment.confidence_pct - 95.0).abs() < 1e-9);
        assert_eq!(assessment.model, "asthma-rf");

        let high = PatientInputRow {
            smoking: 1.0,
            ..Default::default()
        };
        let assessment = predictor.assess(&high).unwrap();
        assert_eq!(assessment.class, RiskClass::HighRisk);
        assert!((assessment.confidence_pct - 75.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_row_is_rejected_before_evaluation() {
        let predictor = ForestPredictor::new(schema_forest()).unwrap();
        let row = PatientInputRow {
            age: -1.0,
            ..Default::default()
        };
        let err = predictor.predict(&row).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
