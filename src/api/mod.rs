//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for payroll calculation and
//! the yukyu ledger.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AdjustRequest, AutoGrantRequest, BatchCalculationRequest, BatchEmployeeRequest,
    CalculationRequest, ExpireRequest, GrantRequest, UseRequest,
};
pub use response::{
    ApiError, AutoGrantItemError, AutoGrantResponse, BatchCalculationResponse, BatchItemResponse,
    ExpireResponse,
};
pub use state::AppState;
