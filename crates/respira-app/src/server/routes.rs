use crate::advice::{advice_for, advice_heading};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use respira_core::{Result, RiskClass};
use respira_model::{form_fields, PatientInputRow};
use serde::Serialize;
use tracing::warn;

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Model endpoint
// ============================================================================

/// Model metadata the form renders from: the ordered field descriptors are
/// keyed by the predictor's declared feature names.
pub async fn model_info(State(state): State<AppState>) -> impl IntoResponse {
    let feature_names = state.predictor.feature_names();
    Json(serde_json::json!({
        "model": state.predictor.name(),
        "feature_count": feature_names.len(),
        "fields": form_fields(feature_names),
    }))
}

// ============================================================================
// Prediction endpoint
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted class
    pub class: RiskClass,

    /// Verdict line shown in the result block
    pub verdict: &'static str,

    /// Probability mass of the predicted class, in percent
    pub confidence_pct: f64,

    /// Model that served the prediction
    pub model: String,

    /// Serving latency in microseconds
    pub latency_us: u64,

    /// Heading for the advisory block
    pub advice_heading: &'static str,

    /// Advisory text for the predicted class
    pub advice: &'static [&'static str],
}

/// Run one prediction over the submitted row.
///
/// Every failure on this path is recoverable: the client gets a 422 with
/// the underlying detail and the form stays usable.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    match run_prediction(&state, body) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            warn!(error = %err, "prediction failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": "prediction failed",
                    "detail": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

fn run_prediction(state: &AppState, body: serde_json::Value) -> Result<PredictResponse> {
    let row: PatientInputRow = serde_json::from_value(body)?;
    let assessment = state.predictor.assess(&row)?;

    Ok(PredictResponse {
        class: assessment.class,
        verdict: assessment.class.verdict(),
        confidence_pct: assessment.confidence_pct,
        model: assessment.model,
        latency_us: assessment.latency_us,
        advice_heading: advice_heading(assessment.class),
        advice: advice_for(assessment.class),
    })
}
