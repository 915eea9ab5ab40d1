//! BMI API routes

use crate::error::{ApiError, ApiResult};
use crate::services::BmiService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bmi_calculator_shared::{
    BmiReport, EvaluateBmiRequest, ReferenceTableResponse, RenderBmiRequest, ScaleQuery,
    ScaleResponse,
};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(evaluate))
        .route("/reference", get(reference_table))
        .route("/scale", get(scale))
        .route("/render", post(render))
}

/// Malformed JSON bodies are reported in the API's own error format
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// POST /api/v1/bmi - Evaluate a measurement
async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateBmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiReport>> {
    let req = json_body(payload)?;
    let report = BmiService::evaluate(state.evaluator(), &req)?;
    Ok(Json(report))
}

/// GET /api/v1/bmi/reference - Category reference table
async fn reference_table(State(state): State<AppState>) -> Json<ReferenceTableResponse> {
    Json(BmiService::reference_table(state.evaluator()))
}

/// GET /api/v1/bmi/scale?value=22.9 - Marker position on the BMI scale
async fn scale(
    query: Result<Query<ScaleQuery>, QueryRejection>,
) -> ApiResult<Json<ScaleResponse>> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Json(BmiService::scale(query.value)?))
}

/// POST /api/v1/bmi/render - Render the calculator view as plain text
async fn render(
    State(state): State<AppState>,
    payload: Result<Json<RenderBmiRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let text = BmiService::render(state.evaluator(), &req)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
