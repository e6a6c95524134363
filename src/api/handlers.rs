//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PayrollRun, apply_input, compute_payroll_line_with_rates, evaluate_reserve_fund_eligibility,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollLine, PayrollLineInput, PayrollStatement, PeriodDays, Roster};

use super::request::{
    ApplyInputRequest, EligibilityRequest, PayrollLineRequest, StatementRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Body of the `/health` response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is serving requests.
    pub status: &'static str,
    /// Engine version.
    pub version: &'static str,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/eligibility", post(eligibility_handler))
        .route("/payroll-line", post(payroll_line_handler))
        .route("/payroll-line/apply", post(apply_input_handler))
        .route("/statement", post(statement_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler for POST /eligibility.
///
/// Evaluates reserve-fund eligibility for a hire date as of a reference
/// date (default: today).
async fn eligibility_handler(
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing eligibility request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let reference_date = request.reference_date.unwrap_or_else(today);
    let eligibility = evaluate_reserve_fund_eligibility(request.hire_date, reference_date);
    info!(
        correlation_id = %correlation_id,
        eligible = eligibility.eligible,
        evaluated_on = %eligibility.evaluated_on,
        "Eligibility evaluated"
    );
    json_ok(eligibility)
}

/// Handler for POST /payroll-line.
///
/// Computes one payroll line from an employee and the entered values.
async fn payroll_line_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollLineRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll line request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match perform_payroll_line(request, state.config()) {
        Ok(line) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %line.employee_id(),
                net_pay = %line.amounts().net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll line computed"
            );
            json_ok(line)
        }
        Err(err) => engine_error_response(err, correlation_id, "Payroll line failed"),
    }
}

/// Handler for POST /payroll-line/apply.
///
/// Applies a single-field edit to a line and returns the recomputed line.
async fn apply_input_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApplyInputRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing input edit request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let field = request.delta.field;
    match perform_apply_input(request, state.config()) {
        Ok(line) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %line.employee_id(),
                field = ?field,
                net_pay = %line.amounts().net_pay,
                "Input applied"
            );
            json_ok(line)
        }
        Err(err) => engine_error_response(err, correlation_id, "Input edit failed"),
    }
}

/// Handler for POST /statement.
///
/// Builds a payroll run for the submitted roster and returns the printable
/// statement.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match perform_statement(request, state.config()) {
        Ok(statement) => {
            info!(
                correlation_id = %correlation_id,
                period = %statement.period_label,
                employee_count = statement.totals.employee_count,
                net_pay = %statement.totals.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Statement generated"
            );
            json_ok(statement)
        }
        Err(err) => engine_error_response(err, correlation_id, "Statement failed"),
    }
}

fn perform_payroll_line(
    request: PayrollLineRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollLine> {
    let days = resolve_period_days(request.days_in_period, config)?;
    let employee = request.employee.into_employee(today());
    let input = request.input.into_input(days);
    compute_payroll_line_with_rates(&employee, &input, days, config.rates())
}

fn perform_apply_input(
    request: ApplyInputRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollLine> {
    let days = resolve_period_days(request.days_in_period, config)?;
    let employee = request.employee.into_employee(today());
    let input = request.input.into_input(days);
    let line = compute_payroll_line_with_rates(&employee, &input, days, config.rates())?;
    apply_input(&line, &employee, request.delta, config.rates())
}

fn perform_statement(
    request: StatementRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollStatement> {
    let today = today();
    let period = request.period.unwrap_or_else(|| config.period().clone());
    let days = period.period_days()?;

    let roster = Roster::new(
        request
            .employees
            .into_iter()
            .map(|employee| employee.into_employee(today))
            .collect(),
    )?;
    let inputs: HashMap<String, PayrollLineInput> = request
        .inputs
        .into_iter()
        .map(|(id, input)| (id, input.into_input(days)))
        .collect();

    let run = PayrollRun::from_inputs(period, &roster, config.rates().clone(), &inputs)?;
    run.statement(&roster)
}

fn resolve_period_days(requested: Option<i64>, config: &ConfigLoader) -> EngineResult<PeriodDays> {
    match requested {
        Some(days) => PeriodDays::new(days),
        None => Ok(config.period_days()),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Unwraps a JSON body or builds the 400 response for a rejected one.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response())
}
