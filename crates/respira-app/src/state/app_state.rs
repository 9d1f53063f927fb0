use crate::config::AppConfig;
use respira_model::Predictor;
use std::sync::Arc;

/// Shared application state.
///
/// Constructed once after the predictor loads and cloned per request.
/// Everything in here is immutable for the process lifetime, so handlers
/// never coordinate on writes.
#[derive(Clone)]
pub struct AppState {
    /// The loaded predictor
    pub predictor: Arc<dyn Predictor>,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, config: AppConfig) -> Self {
        Self {
            predictor,
            config: Arc::new(config),
        }
    }
}
