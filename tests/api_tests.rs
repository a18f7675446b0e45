/// HTTP contract tests for the estimate service
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use costcalc::config::Config;
use costcalc::handlers::AppState;
use costcalc::pricing::Profile;
use costcalc::server::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(config: Config) -> Router {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    create_router(AppState::new(config), Arc::new(recorder.handle()))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_estimate_fivetran() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({"platform": "fivetran", "monthly_active_rows": 10, "tier": "Enterprise"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["monthly_cost"], json!(4000.0));
    assert_eq!(body["breakdown"]["annual_cost"], json!(48000.0));
    assert_eq!(body["breakdown"]["initial_setup"]["kind"], "included");
    assert!(body["id"].as_str().is_some());
    assert!(body["rendered"]
        .as_str()
        .unwrap()
        .contains("Monthly Cost: $4,000.00"));
    assert!(body["rendered"]
        .as_str()
        .unwrap()
        .ends_with(costcalc::format::DISCLAIMER));
}

#[tokio::test]
async fn test_estimate_snowflake_weekly() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({
            "platform": "snowflake",
            "warehouse_size": "XS",
            "region": "us-east-1",
            "uptime": {"weekday_uptime_hours": 8, "weekend_uptime_hours": 0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["monthly_cost"], json!(80.0));
}

#[tokio::test]
async fn test_negative_input_is_unprocessable() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({"platform": "airbyte", "monthly_active_rows": -1}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_overflowing_estimate_is_unprocessable() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({
            "platform": "fivetran",
            "monthly_active_rows": 1e308,
            "projected_growth": 100,
            "tier": "Enterprise"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_mixed_uptime_forms_are_bad_request() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({
            "platform": "snowflake",
            "warehouse_size": "XS",
            "region": "us-east-1",
            "uptime": {"usage_hours": 10, "weekday_uptime_hours": 8, "weekend_uptime_hours": 0}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn test_unknown_region_is_configuration_error() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({
            "platform": "snowflake",
            "warehouse_size": "M",
            "region": "moon-base-1",
            "uptime": {"usage_hours": 10}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "config_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("moon-base-1"));
}

#[tokio::test]
async fn test_tier_outside_profile_is_bad_request() {
    let config = Config {
        profile: Profile::enterprise_only(),
        ..Config::default()
    };
    let (status, body) = post_json(
        app(config),
        "/v1/estimate",
        json!({"platform": "fivetran", "monthly_active_rows": 1, "tier": "Standard"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "config_error");
}

#[tokio::test]
async fn test_unknown_platform_is_bad_request() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/estimate",
        json!({"platform": "stitch"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn test_compare_returns_cheapest_first() {
    let (status, body) = post_json(
        app(Config::default()),
        "/v1/compare",
        json!({"monthly_active_rows": 25, "fivetran_tier": "Starter"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let costs: Vec<f64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["monthly_cost"].as_f64().unwrap())
        .collect();
    assert_eq!(costs.len(), 3);
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_catalog_and_health() {
    let app = app(Config::default());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/v1/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let catalog: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(catalog["fivetran_tiers"].as_array().unwrap().len(), 4);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
