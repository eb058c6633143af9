//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for the payroll calculation
//! and yukyu ledger endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    CalculationInputs, PayrollCalculator, PayrollDataSource,
};
use crate::models::{EmployeeSnapshot, PayPeriod, TimeRecord};

use super::request::{
    AdjustRequest, AutoGrantRequest, BatchCalculationRequest, CalculationRequest, ExpireRequest,
    GrantRequest, UseRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AutoGrantItemError, AutoGrantResponse, BatchCalculationResponse,
    BatchItemResponse, ExpireResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/calculate/batch", post(calculate_batch_handler))
        .route("/yukyu/grant", post(grant_handler))
        .route("/yukyu/use", post(use_handler))
        .route("/yukyu/expire", post(expire_handler))
        .route("/yukyu/adjust", post(adjust_handler))
        .route("/yukyu/auto_grant", post(auto_grant_handler))
        .route("/yukyu/:employee_id/balances", get(balances_handler))
        .route("/yukyu/:employee_id/transactions", get(transactions_handler))
        .with_state(state)
}

/// Unwraps an extracted JSON body, turning rejections into 400 responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Body text carries the detailed serde error
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for the POST /payroll/calculate endpoint.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let configuration = match state
        .config()
        .rate_configuration(&request.company_id, request.period.start_date)
    {
        Ok(configuration) => configuration.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                company_id = %request.company_id,
                error = %err,
                "Rate configuration lookup failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let calculator = PayrollCalculator::new(configuration);
    let inputs = CalculationInputs {
        allowances: request.allowances,
        other_deductions: request.other_deductions,
        yukyu_days_approved: request.yukyu_days_approved,
    };

    let start_time = Instant::now();
    match calculator.calculate(
        &request.employee,
        &request.time_records,
        &request.period,
        &inputs,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                gross = %result.amounts.gross,
                net = %result.amounts.net,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// In-request data source backing a batch calculation.
struct BatchSource {
    employees: HashMap<String, EmployeeSnapshot>,
    records: HashMap<String, Vec<TimeRecord>>,
    leave_days: HashMap<String, Decimal>,
}

impl PayrollDataSource for BatchSource {
    fn employee(&self, employee_id: &str) -> Option<EmployeeSnapshot> {
        self.employees.get(employee_id).cloned()
    }

    fn time_records(&self, employee_id: &str, _period: &PayPeriod) -> Vec<TimeRecord> {
        self.records.get(employee_id).cloned().unwrap_or_default()
    }

    fn approved_leave_days(&self, employee_id: &str, _period: &PayPeriod) -> Decimal {
        self.leave_days
            .get(employee_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Handler for the POST /payroll/calculate/batch endpoint.
async fn calculate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let configuration = match state
        .config()
        .rate_configuration(&request.company_id, request.period.start_date)
    {
        Ok(configuration) => configuration.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                company_id = %request.company_id,
                error = %err,
                "Rate configuration lookup failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let employee_ids: Vec<String> = request
        .employees
        .iter()
        .map(|e| e.employee.id.clone())
        .collect();
    let mut source = BatchSource {
        employees: HashMap::new(),
        records: HashMap::new(),
        leave_days: HashMap::new(),
    };
    for entry in request.employees {
        let id = entry.employee.id.clone();
        source.employees.insert(id.clone(), entry.employee);
        source.records.insert(id.clone(), entry.time_records);
        source.leave_days.insert(id, entry.yukyu_days_approved);
    }

    let calculator = PayrollCalculator::new(configuration);
    let start_time = Instant::now();
    let batch = calculator.calculate_many(&source, &employee_ids, &request.period);

    info!(
        correlation_id = %correlation_id,
        employees = employee_ids.len(),
        success = batch.success_count,
        errors = batch.error_count,
        total_gross = %batch.total_gross,
        duration_us = start_time.elapsed().as_micros(),
        "Batch calculation completed"
    );

    let results = employee_ids
        .into_iter()
        .zip(batch.results)
        .map(|(employee_id, result)| match result {
            Ok(payroll) => BatchItemResponse {
                employee_id,
                result: Some(payroll),
                error: None,
            },
            Err(err) => BatchItemResponse {
                employee_id,
                result: None,
                error: Some(ApiErrorResponse::from(err).error),
            },
        })
        .collect();

    let response = BatchCalculationResponse {
        results,
        success_count: batch.success_count,
        error_count: batch.error_count,
        total_gross: batch.total_gross,
        total_net: batch.total_net,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the POST /yukyu/grant endpoint.
async fn grant_handler(
    State(state): State<AppState>,
    payload: Result<Json<GrantRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.ledger().grant(
        &request.employee_id,
        request.fiscal_year,
        request.days,
        request.grant_date,
        &request.reason,
    ) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Grant failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /yukyu/use endpoint.
async fn use_handler(
    State(state): State<AppState>,
    payload: Result<Json<UseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.ledger().use_days(
        &request.employee_id,
        request.days,
        request.usage_date,
        &request.reason,
    ) {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Use failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /yukyu/expire endpoint.
async fn expire_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExpireRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let expired_count = state.ledger().expire(request.as_of_date);
    (StatusCode::OK, Json(ExpireResponse { expired_count })).into_response()
}

/// Handler for the POST /yukyu/adjust endpoint.
async fn adjust_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdjustRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.ledger().adjust(
        &request.employee_id,
        request.fiscal_year,
        request.delta_days,
        request.adjustment_date,
        &request.reason,
    ) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Adjustment failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /yukyu/auto_grant endpoint.
async fn auto_grant_handler(
    State(state): State<AppState>,
    payload: Result<Json<AutoGrantRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let outcome = state
        .ledger()
        .auto_grant(&request.employees, request.fiscal_year, request.grant_date);

    info!(
        correlation_id = %correlation_id,
        fiscal_year = request.fiscal_year,
        granted = outcome.granted.len(),
        skipped = outcome.skipped.len(),
        errors = outcome.errors.len(),
        "Auto-grant request completed"
    );

    let response = AutoGrantResponse {
        granted: outcome.granted,
        skipped: outcome.skipped,
        errors: outcome
            .errors
            .into_iter()
            .map(|(employee_id, err)| AutoGrantItemError {
                employee_id,
                error: ApiErrorResponse::from(err).error,
            })
            .collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the GET /yukyu/:employee_id/balances endpoint.
async fn balances_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    (StatusCode::OK, Json(state.ledger().balances(&employee_id))).into_response()
}

/// Handler for the GET /yukyu/:employee_id/transactions endpoint.
async fn transactions_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    (
        StatusCode::OK,
        Json(state.ledger().transactions(&employee_id)),
    )
        .into_response()
}
