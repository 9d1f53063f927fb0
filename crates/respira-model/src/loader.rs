//! One-time predictor initialization

use respira_core::Result;
use std::sync::Arc;
use tracing::info;

use crate::artifact::ArtifactConfig;
use crate::forest::RandomForest;
use crate::predictor::{ForestPredictor, Predictor};

/// Resolve the artifact and deserialize it into a ready-to-use predictor.
///
/// Called once at startup; the returned `Arc` is threaded through
/// application state and shared read-only for the process lifetime. Any
/// failure here is fatal since no prediction can be served without a model.
pub async fn load_predictor(config: &ArtifactConfig) -> Result<Arc<ForestPredictor>> {
    let path = config.ensure_local().await?;

    info!(path = %path.display(), "loading model artifact");
    let raw = tokio::fs::read(&path).await?;

    let forest = RandomForest::from_json(&raw)?;
    let predictor = ForestPredictor::new(forest)?;

    info!(
        model = predictor.name(),
        trees = predictor.tree_count(),
        features = predictor.feature_names().len(),
        "model ready"
    );
    Ok(Arc::new(predictor))
}
