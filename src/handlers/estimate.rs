use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::format;
use crate::handlers::AppState;
use crate::metrics;
use crate::pricing::{ComparisonInput, CostBreakdown, EstimateRequest};

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub id: Uuid,
    pub generated_at: String,
    pub breakdown: CostBreakdown,
    pub rendered: String,
}

impl EstimateResponse {
    fn new(breakdown: CostBreakdown) -> Self {
        let rendered = format::render_breakdown(&breakdown);
        Self {
            id: Uuid::new_v4(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            breakdown,
            rendered,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub id: Uuid,
    pub generated_at: String,
    /// Cheapest first
    pub results: Vec<CostBreakdown>,
}

/// Handle POST /v1/estimate
pub async fn handle_estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Json(request) = payload?;
    let platform = request.platform();

    let breakdown = state.estimator().estimate(&request).map_err(|e| {
        warn!(%platform, error = %e, "Estimate rejected");
        metrics::record_error(Some(platform), "api", &e);
        AppError::from(e)
    })?;

    metrics::record_estimate(platform, "api", breakdown.monthly_cost());

    let response = EstimateResponse::new(breakdown);
    info!(
        id = %response.id,
        %platform,
        monthly_cost = response.breakdown.monthly_cost(),
        "Estimate completed"
    );

    Ok(Json(response))
}

/// Handle POST /v1/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonInput>, JsonRejection>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let Json(input) = payload?;

    let results = state.estimator().compare(&input).map_err(|e| {
        warn!(error = %e, "Comparison rejected");
        metrics::record_error(None, "api_compare", &e);
        AppError::from(e)
    })?;

    for breakdown in &results {
        metrics::record_estimate(breakdown.platform(), "api_compare", breakdown.monthly_cost());
    }

    let response = ComparisonResponse {
        id: Uuid::new_v4(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        results,
    };
    info!(id = %response.id, "Comparison completed");

    Ok(Json(response))
}
