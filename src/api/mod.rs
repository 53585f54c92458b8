//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for computing semi-monthly pay,
//! persisting payroll records, computing thirteenth-month pay, and managing
//! the recruitment pipeline.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    SaveCandidateRequest, SaveEmployeeRequest, SaveJobRequest, SavePayrollRequest,
};
pub use response::{
    ApiError, CalculationResponse, FormattedBreakdown, PipelineSummaryResponse,
    SavePayrollResponse, ThirteenthMonthResponse,
};
pub use state::AppState;
