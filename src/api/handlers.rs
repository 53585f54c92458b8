//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ThirteenthMonthWindow, calculate_payroll, calculate_thirteenth_month,
};
use crate::format::format_currency;
use crate::models::{
    Candidate, Employee, JobPosting, PayPeriod, PayPeriodHalf, PayrollInput, PeriodKey,
};
use crate::recruitment::{job_summaries, stage_counts};

use super::request::{
    SaveCandidateRequest, SaveEmployeeRequest, SaveJobRequest, SavePayrollRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, PipelineSummaryResponse, SavePayrollResponse,
    ThirteenthMonthResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll", post(save_payroll_handler))
        .route(
            "/payroll/:employee_id/:year/:month/:half",
            get(get_payroll_handler),
        )
        .route(
            "/employees",
            get(list_employees_handler).post(save_employee_handler),
        )
        .route("/employees/:id", get(get_employee_handler))
        .route(
            "/thirteenth-month/:employee_id/:year",
            get(thirteenth_month_handler),
        )
        .route("/jobs", get(list_jobs_handler).post(save_job_handler))
        .route(
            "/candidates",
            get(list_candidates_handler).post(save_candidate_handler),
        )
        .route("/recruitment/pipeline", get(pipeline_summary_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a structured API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate.
///
/// Computes a semi-monthly pay breakdown without persisting anything.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollInput>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match calculate_payroll(&input, state.config().config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                net_pay = %result.net_pay,
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(CalculationResponse::from(result))).into_response()
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

/// Handler for POST /payroll.
///
/// Computes a breakdown and persists it under the `(employee, year, month,
/// half)` key; a repeat save for the same key updates the stored record.
/// The month's basic-pay bucket is rewritten with the monthly salary for
/// thirteenth-month pay.
async fn save_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<SavePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let key = request.key();
    if let Err(err) = key.period.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid pay period");
        return ApiErrorResponse::from(err).into_response();
    }

    let result = match calculate_payroll(&request.input, state.config().config()) {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // The computation above stays valid even if persistence fails; the
    // store error is surfaced and nothing partial is kept in memory.
    let record = match state.store().upsert_payroll(key, result).await {
        Ok(record) => record,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll save failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    if let Err(err) = state
        .store()
        .upsert_basic_pay(
            &request.employee_id,
            request.year,
            request.month,
            request.input.monthly_salary,
        )
        .await
    {
        warn!(correlation_id = %correlation_id, error = %err, "Basic pay save failed");
        return ApiErrorResponse::from(err).into_response();
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %record.key.employee_id,
        record_id = %record.record_id,
        "Payroll record saved"
    );

    let response = SavePayrollResponse {
        record_id: record.record_id,
        key: record.key,
        saved_at: record.saved_at,
        calculation: CalculationResponse::from(record.result),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().list_employees().await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /employees.
async fn save_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let employee: Employee = request.into();
    match state.store().upsert_employee(employee.clone()).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, employee_id = %employee.id, "Employee saved");
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /employees/{id}.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store().get_employee(&id).await {
        Ok(Some(employee)) => (StatusCode::OK, Json(employee)).into_response(),
        Ok(None) => {
            let error = ApiError::new(
                "EMPLOYEE_NOT_FOUND",
                format!("No employee with id '{}'", id),
            );
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /payroll/{employee_id}/{year}/{month}/{half}.
///
/// Fetches the payroll record saved under the period key, if any.
async fn get_payroll_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month, half)): Path<(String, i32, u32, PayPeriodHalf)>,
) -> impl IntoResponse {
    let key = PeriodKey {
        employee_id,
        period: PayPeriod { year, month, half },
    };
    if let Err(err) = key.period.validate() {
        return ApiErrorResponse::from(err).into_response();
    }

    match state.store().get_payroll(&key).await {
        Ok(Some(record)) => {
            let response = SavePayrollResponse {
                record_id: record.record_id,
                key: record.key,
                saved_at: record.saved_at,
                calculation: CalculationResponse::from(record.result),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => {
            let error = ApiError::new(
                "RECORD_NOT_FOUND",
                format!(
                    "No payroll record saved for employee '{}' in that period",
                    key.employee_id
                ),
            );
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /jobs.
async fn list_jobs_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().list_jobs().await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /jobs.
async fn save_job_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveJobRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let job: JobPosting = request.into();
    match state.store().upsert_job(job.clone()).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, job_id = %job.id, "Job posting saved");
            (StatusCode::CREATED, Json(job)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /candidates.
async fn list_candidates_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().list_candidates().await {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /candidates.
///
/// Re-posting an existing candidate id updates the stored record; the
/// pipeline summary reflects the new stage on its next read without any
/// counter being touched.
async fn save_candidate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveCandidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let candidate: Candidate = request.into();
    match state.store().upsert_candidate(candidate.clone()).await {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                candidate_id = %candidate.id,
                stage = ?candidate.stage,
                "Candidate saved"
            );
            (StatusCode::CREATED, Json(candidate)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /recruitment/pipeline.
///
/// Stage totals and per-job applicant counts, recomputed from the stored
/// records on every request.
async fn pipeline_summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let jobs = match state.store().list_jobs().await {
        Ok(jobs) => jobs,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };
    let candidates = match state.store().list_candidates().await {
        Ok(candidates) => candidates,
        Err(err) => return ApiErrorResponse::from(err).into_response(),
    };

    let response = PipelineSummaryResponse {
        stages: stage_counts(&candidates),
        jobs: job_summaries(&jobs, &candidates),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /thirteenth-month/{employee_id}/{year}.
///
/// Computes thirteenth-month pay from the stored basic-pay records in the
/// December-to-November window. An empty window is a 404, not a zero.
async fn thirteenth_month_handler(
    State(state): State<AppState>,
    Path((employee_id, year)): Path<(String, i32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let window = ThirteenthMonthWindow { year };

    let records = match state.store().basic_pay_in_window(&employee_id, window).await {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Basic pay query failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match calculate_thirteenth_month(&employee_id, &records, window) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                months_counted = result.months_counted,
                "Thirteenth-month pay computed"
            );
            let response = ThirteenthMonthResponse {
                employee_id,
                year,
                total_basic_pay: result.total_basic_pay,
                months_counted: result.months_counted,
                amount: result.amount,
                formatted_amount: format_currency(result.amount),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Thirteenth-month computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/ph").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_calculate_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"monthly_salary": "15000"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            result.result.net_pay,
            Decimal::from_str("6175.00").unwrap()
        );
        assert_eq!(result.formatted.net_pay, "₱6,175.00");
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_negative_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{"monthly_salary": "15000", "overtime_hours": "-2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("overtime_hours"));
    }

    #[tokio::test]
    async fn test_save_payroll_invalid_month_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "employee_id": "emp_001",
            "year": 2025,
            "month": 13,
            "half": "first",
            "input": {"monthly_salary": "15000"}
        }"#;

        let response = router.oneshot(post_json("/payroll", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_thirteenth_month_without_records_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/thirteenth-month/emp_001/2025")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_DATA_FOUND");
    }

    #[tokio::test]
    async fn test_get_missing_payroll_record_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/payroll/emp_001/2025/6/first")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RECORD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_missing_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/employees/emp_999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_pipeline_summary_lists_every_stage_at_zero() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/recruitment/pipeline")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: PipelineSummaryResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.stages.len(), 6);
        assert!(summary.stages.iter().all(|s| s.count == 0));
        assert!(summary.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_employees_starts_empty() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/employees")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let employees: Vec<Employee> = serde_json::from_slice(&body).unwrap();
        assert!(employees.is_empty());
    }
}
