//! Response types for the payroll engine API.
//!
//! This module defines the success response structures, the error response
//! structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::format_currency;
use crate::models::{PayrollResult, PeriodKey};
use crate::recruitment::{JobApplicantSummary, StageCount};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The full unrounded breakdown.
    pub result: PayrollResult,
    /// Display-ready currency strings per component.
    pub formatted: FormattedBreakdown,
}

impl From<PayrollResult> for CalculationResponse {
    fn from(result: PayrollResult) -> Self {
        let formatted = FormattedBreakdown::from(&result);
        Self { result, formatted }
    }
}

/// A formatted currency string for every component of a payroll result.
///
/// Rounding to two decimals happens here and only here; the underlying
/// result keeps full precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedBreakdown {
    /// Formatted daily rate.
    pub daily_rate: String,
    /// Formatted hourly rate.
    pub hourly_rate: String,
    /// Formatted absences deduction.
    pub absences_deduction: String,
    /// Formatted late deduction.
    pub late_deduction: String,
    /// Formatted overtime pay.
    pub overtime_pay: String,
    /// Formatted night differential pay.
    pub night_differential_pay: String,
    /// Formatted special holiday pay.
    pub special_holiday_pay: String,
    /// Formatted sick leave pay.
    pub sick_leave_pay: String,
    /// Formatted SSS contribution.
    pub sss_contribution: String,
    /// Formatted PhilHealth contribution.
    pub phil_health_contribution: String,
    /// Formatted Pag-IBIG contribution.
    pub pag_ibig_contribution: String,
    /// Formatted withholding tax.
    pub income_tax: String,
    /// Formatted total deductions.
    pub total_deductions: String,
    /// Formatted net pay.
    pub net_pay: String,
}

impl From<&PayrollResult> for FormattedBreakdown {
    fn from(result: &PayrollResult) -> Self {
        Self {
            daily_rate: format_currency(result.daily_rate),
            hourly_rate: format_currency(result.hourly_rate),
            absences_deduction: format_currency(result.absences_deduction),
            late_deduction: format_currency(result.late_deduction),
            overtime_pay: format_currency(result.overtime_pay),
            night_differential_pay: format_currency(result.night_differential_pay),
            special_holiday_pay: format_currency(result.special_holiday_pay),
            sick_leave_pay: format_currency(result.sick_leave_pay),
            sss_contribution: format_currency(result.sss_contribution),
            phil_health_contribution: format_currency(result.phil_health_contribution),
            pag_ibig_contribution: format_currency(result.pag_ibig_contribution),
            income_tax: format_currency(result.income_tax),
            total_deductions: format_currency(result.total_deductions),
            net_pay: format_currency(result.net_pay),
        }
    }
}

/// Response body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePayrollResponse {
    /// The stored record's id, stable across repeat saves of the same key.
    pub record_id: Uuid,
    /// The key the record was saved under.
    pub key: PeriodKey,
    /// When the record was written.
    pub saved_at: DateTime<Utc>,
    /// The computed breakdown with formatted strings.
    pub calculation: CalculationResponse,
}

/// Response body for the thirteenth-month endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthMonthResponse {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The target year of the December-to-November window.
    pub year: i32,
    /// Sum of basic pay over the window.
    pub total_basic_pay: Decimal,
    /// The number of monthly buckets that held a record.
    pub months_counted: u32,
    /// The thirteenth-month pay amount.
    pub amount: Decimal,
    /// The amount as a display currency string.
    pub formatted_amount: String,
}

/// Response body for the `GET /recruitment/pipeline` endpoint.
///
/// Both count lists are recomputed from the stored records on every
/// request; the response is a snapshot, not a cached counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummaryResponse {
    /// Candidates per pipeline stage, in pipeline order.
    pub stages: Vec<StageCount>,
    /// Job postings with their derived applicant counts.
    pub jobs: Vec<JobApplicantSummary>,
}

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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    "The request contains an invalid value",
                ),
            },
            EngineError::ContributionGap { salary } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONTRIBUTION_GAP",
                    format!("No SSS contribution band covers monthly salary {}", salary),
                    "The contribution table is incomplete; this is a configuration defect",
                ),
            },
            EngineError::NoDataFound { employee_id, year } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_DATA_FOUND",
                    format!(
                        "No basic pay records found for employee '{}' in the {} window",
                        employee_id, year
                    ),
                    "Save payroll records for the window before computing thirteenth-month pay",
                ),
            },
            EngineError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "Record store unavailable",
                    message,
                ),
            },
        }
    }
}
