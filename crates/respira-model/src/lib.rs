//! Respira Model
//!
//! Model artifact resolution and the asthma risk predictor.
//!
//! The classifier itself is an externally trained artifact; this crate
//! downloads it once, deserializes it, and serves deterministic
//! predict / predict-probability queries over fixed-schema patient rows.

pub mod artifact;
pub mod forest;
pub mod loader;
pub mod predictor;
pub mod row;
pub mod schema;

pub use artifact::{default_cache_dir, ArtifactConfig, ArtifactSource};
pub use forest::{Node, RandomForest, Tree, FORMAT_VERSION};
pub use loader::load_predictor;
pub use predictor::{ForestPredictor, Predictor};
pub use row::PatientInputRow;
pub use schema::{form_fields, FieldDescriptor, FEATURE_COUNT, FEATURE_NAMES};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifact::{ArtifactConfig, ArtifactSource};
    pub use crate::loader::load_predictor;
    pub use crate::predictor::{ForestPredictor, Predictor};
    pub use crate::row::PatientInputRow;
    pub use crate::schema::{FEATURE_COUNT, FEATURE_NAMES};
}
