//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for evaluating reserve-fund
//! eligibility, computing payroll lines and generating period statements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{HealthResponse, create_router};
pub use request::{
    ApplyInputRequest, EligibilityRequest, EmployeeRequest, PayrollLineInputRequest,
    PayrollLineRequest, StatementRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
