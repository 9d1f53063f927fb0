//! Core types for Respira

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Binary risk class produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    /// Class 0: low asthma risk
    LowRisk,
    /// Class 1: high asthma risk
    HighRisk,
}

impl RiskClass {
    /// Convert a raw class index from the model into a risk class.
    ///
    /// The serving path only supports binary classifiers; any other index
    /// is a model error.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::LowRisk),
            1 => Ok(Self::HighRisk),
            other => Err(Error::model(format!(
                "expected binary class index, got {}",
                other
            ))),
        }
    }

    /// Raw class index as declared by the model
    pub fn index(&self) -> usize {
        match self {
            Self::LowRisk => 0,
            Self::HighRisk => 1,
        }
    }

    /// Human-readable verdict shown in the result block
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::LowRisk => "Low Risk of Asthma",
            Self::HighRisk => "High Risk of Asthma Detected",
        }
    }
}

/// Result of one risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Predicted risk class
    pub class: RiskClass,

    /// Probability mass assigned to the predicted class, scaled to [0, 100]
    pub confidence_pct: f64,

    /// Name of the model that produced the assessment
    pub model: String,

    /// Serving latency in microseconds
    pub latency_us: u64,
}

impl RiskAssessment {
    /// Create a new assessment
    pub fn new(class: RiskClass, confidence_pct: f64, model: impl Into<String>) -> Self {
        Self {
            class,
            confidence_pct,
            model: model.into(),
            latency_us: 0,
        }
    }
}
