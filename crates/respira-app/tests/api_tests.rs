//! In-process API tests against the full router

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use respira_app::config::AppConfig;
use respira_app::server::build_app;
use respira_app::state::AppState;
use respira_model::{
    ForestPredictor, Node, PatientInputRow, RandomForest, Tree, FEATURE_COUNT, FEATURE_NAMES,
    FORMAT_VERSION,
};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Single-tree predictor over the full schema, splitting on smoking
fn fixture_state() -> AppState {
    let forest = RandomForest {
        format_version: FORMAT_VERSION,
        model_name: "asthma-rf-test".to_string(),
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
    };
    let predictor = Arc::new(ForestPredictor::new(forest).unwrap());
    AppState::new(predictor, AppConfig::default())
}

fn predict_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = build_app(fixture_state());

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn model_info_lists_all_form_fields() {
    let app = build_app(fixture_state());

    let response = app
        .oneshot(Request::get("/api/model").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["model"], "asthma-rf-test");
    assert_eq!(body["feature_count"], FEATURE_COUNT);

    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), FEATURE_COUNT);
    assert_eq!(fields[0]["name"], "age");
    assert_eq!(fields[0]["label"], "Age (years)");
    assert_eq!(fields[0]["default"], 0.0);
}

#[tokio::test]
async fn all_zero_row_predicts_low_risk_with_advice() {
    let app = build_app(fixture_state());
    let row = serde_json::to_value(PatientInputRow::default()).unwrap();

    let response = app.oneshot(predict_request(row)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["class"], "low_risk");
    assert_eq!(body["verdict"], "Low Risk of Asthma");
    assert_eq!(body["advice_heading"], "Health Maintenance Tips");
    assert_eq!(body["advice"].as_array().unwrap().len(), 5);

    let confidence = body["confidence_pct"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&confidence));
}

#[tokio::test]
async fn smoker_row_predicts_high_risk_with_matching_advice() {
    let app = build_app(fixture_state());
    let row = serde_json::to_value(PatientInputRow {
        smoking: 1.0,
        genetic_risk: 1.0,
        chronic_lung_disease: 1.0,
        ..Default::default()
    })
    .unwrap();

    let response = app.oneshot(predict_request(row)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["class"], "high_risk");
    assert_eq!(body["verdict"], "High Risk of Asthma Detected");
    assert_eq!(body["advice_heading"], "Detailed Suggestions");
    assert_eq!(body["advice"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn identical_rows_get_identical_responses() {
    let app = build_app(fixture_state());
    let row = serde_json::to_value(PatientInputRow::default()).unwrap();

    let first = response_json(
        app.clone()
            .oneshot(predict_request(row.clone()))
            .await
            .unwrap(),
    )
    .await;

    for _ in 0..3 {
        let again = response_json(
            app.clone()
                .oneshot(predict_request(row.clone()))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(again["class"], first["class"]);
        assert_eq!(again["confidence_pct"], first["confidence_pct"]);
    }
}

#[tokio::test]
async fn malformed_row_is_recoverable() {
    let app = build_app(fixture_state());

    // Missing every field but age
    let response = app
        .clone()
        .oneshot(predict_request(serde_json::json!({ "age": 30.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["error"], "prediction failed");
    assert!(body["detail"].as_str().unwrap().contains("missing field"));

    // The session survives: the next well-formed request succeeds.
    let row = serde_json::to_value(PatientInputRow::default()).unwrap();
    let response = app.oneshot(predict_request(row)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn out_of_bound_value_is_rejected_with_detail() {
    let app = build_app(fixture_state());
    let row = serde_json::to_value(PatientInputRow {
        air_pollution: 5000.0,
        ..Default::default()
    })
    .unwrap();

    let response = app.oneshot(predict_request(row)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("air_pollution"));
}

#[tokio::test]
async fn root_serves_the_form_page() {
    let app = build_app(fixture_state());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Asthma Risk Prediction System"));
    assert!(html.contains("Run Prediction"));
}
