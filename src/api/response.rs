//! Response types for the payroll engine API.
//!
//! This module defines the error response structures, the engine-error to
//! HTTP mapping, and the response bodies that have no direct domain type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::ledger::YukyuBalance;
use crate::models::PayrollResult;
use rust_decimal::Decimal;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::ConfigurationMissing { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("CONFIGURATION_MISSING", message),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            EngineError::InvalidShift { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_SHIFT", message),
            },
            EngineError::InsufficientBalance { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INSUFFICIENT_BALANCE", message),
            },
            EngineError::DuplicateGrant { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_GRANT", message),
            },
            EngineError::InvalidAdjustment { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_ADJUSTMENT", message),
            },
            EngineError::BalanceNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("BALANCE_NOT_FOUND", message),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("CALCULATION_ERROR", message),
            },
        }
    }
}

/// One employee's slot in a batch calculation response.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchItemResponse {
    /// The employee this slot belongs to.
    pub employee_id: String,
    /// The calculation result, when the slot succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PayrollResult>,
    /// The failure, when the slot did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Response body for the `/payroll/calculate/batch` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchCalculationResponse {
    /// Per-employee outcomes, in request order.
    pub results: Vec<BatchItemResponse>,
    /// Number of successful calculations.
    pub success_count: usize,
    /// Number of failed calculations.
    pub error_count: usize,
    /// Sum of gross pay over successful results.
    pub total_gross: Decimal,
    /// Sum of net pay over successful results.
    pub total_net: Decimal,
}

/// Response body for the `/yukyu/expire` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpireResponse {
    /// Number of balances expired by this call.
    pub expired_count: usize,
}

/// One employee's failure in an auto-grant batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct AutoGrantItemError {
    /// The employee whose grant failed.
    pub employee_id: String,
    /// The failure.
    pub error: ApiError,
}

/// Response body for the `/yukyu/auto_grant` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AutoGrantResponse {
    /// Balances created, one per newly granted employee.
    pub granted: Vec<YukyuBalance>,
    /// Employees skipped because their tenure grants no days yet.
    pub skipped: Vec<String>,
    /// Per-employee failures; the batch itself always completes.
    pub errors: Vec<AutoGrantItemError>,
}
