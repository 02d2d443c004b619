//! HTTP request handlers for the reform cost engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{get_day_type, run_simulation};
use crate::models::OperatingParameters;

use super::request::SimulationRequest;
use super::response::{ApiError, ApiErrorResponse, RegimeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .route("/regime/:date", get(regime_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST /simulate endpoint.
///
/// Runs one simulation and returns the monthly summary.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::new("VALIDATION_ERROR", body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let include_daily = request.include_daily;
    let params: OperatingParameters = request.into();

    match run_simulation(&params, state.config().config(), include_daily) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                simulation_id = %result.simulation_id,
                months = result.totals.month_count,
                duration_us = result.duration_us,
                "Simulation request completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /regime/:date endpoint.
///
/// Returns the regulatory regime in force on the given date.
async fn regime_handler(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
) -> Response {
    let date = match date {
        Ok(Path(date)) => date,
        Err(rejection) => {
            warn!(error = %rejection, "Invalid date in path");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_date(rejection.body_text()),
            );
        }
    };

    let config = state.config();
    json_response(
        StatusCode::OK,
        RegimeResponse {
            date,
            day_type: get_day_type(date),
            reform: config.metadata().code.clone(),
            regime: config.regime_at(date),
        },
    )
}
