//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the endpoints that
//! take a body. The `/calculate` endpoint takes a bare
//! [`PayrollInput`](crate::models::PayrollInput); every numeric field
//! defaults to zero when absent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Candidate, Employee, JobPosting, JobStatus, PayPeriod, PayPeriodHalf, PayrollInput, PeriodKey,
    PipelineStage,
};

/// Request body for the `/payroll` endpoint: compute and persist a payroll
/// record for one employee and pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePayrollRequest {
    /// The employee the record is for.
    pub employee_id: String,
    /// Calendar year of the pay period.
    pub year: i32,
    /// Calendar month of the pay period, 1 through 12.
    pub month: u32,
    /// Which half of the month.
    pub half: PayPeriodHalf,
    /// The calculation inputs.
    pub input: PayrollInput,
}

impl SavePayrollRequest {
    /// The store key this request saves under.
    pub fn key(&self) -> PeriodKey {
        PeriodKey {
            employee_id: self.employee_id.clone(),
            period: PayPeriod {
                year: self.year,
                month: self.month,
                half: self.half,
            },
        }
    }
}

/// Request body for the `POST /employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's monthly salary.
    pub monthly_salary: Decimal,
}

impl From<SaveEmployeeRequest> for Employee {
    fn from(req: SaveEmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            monthly_salary: req.monthly_salary,
        }
    }
}

/// Request body for the `POST /jobs` endpoint.
///
/// There is no applicants field to submit; the count is derived from the
/// candidate records on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveJobRequest {
    /// Unique identifier for the posting.
    pub id: String,
    /// The job title candidates apply for.
    pub title: String,
    /// The department the posting belongs to.
    pub department: String,
    /// Whether the posting accepts applications.
    pub status: JobStatus,
}

impl From<SaveJobRequest> for JobPosting {
    fn from(req: SaveJobRequest) -> Self {
        JobPosting {
            id: req.id,
            title: req.title,
            department: req.department,
            status: req.status,
        }
    }
}

/// Request body for the `POST /candidates` endpoint.
///
/// Re-posting an existing candidate id updates the record; moving the
/// stage this way is how a candidate advances through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCandidateRequest {
    /// Unique identifier for the candidate.
    pub id: String,
    /// The candidate's full name.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
    /// Link to the candidate's resume.
    #[serde(default)]
    pub resume_link: String,
    /// The position applied for.
    pub position: String,
    /// The job posting applied to, when known.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Current pipeline stage; a fresh application starts at the first
    /// stage when omitted.
    #[serde(default)]
    pub stage: PipelineStage,
    /// The date the application was received.
    pub applied_on: NaiveDate,
}

impl From<SaveCandidateRequest> for Candidate {
    fn from(req: SaveCandidateRequest) -> Self {
        Candidate {
            id: req.id,
            name: req.name,
            phone_number: req.phone_number,
            resume_link: req.resume_link,
            position: req.position,
            job_id: req.job_id,
            stage: req.stage,
            applied_on: req.applied_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_save_payroll_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "year": 2025,
            "month": 6,
            "half": "first",
            "input": {
                "monthly_salary": "26000",
                "absences": 2
            }
        }"#;

        let request: SavePayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.half, PayPeriodHalf::First);
        assert_eq!(
            request.input.monthly_salary,
            Decimal::from_str("26000").unwrap()
        );
        assert_eq!(request.input.absences, 2);
        assert_eq!(request.input.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_key_carries_period() {
        let json = r#"{
            "employee_id": "emp_001",
            "year": 2025,
            "month": 6,
            "half": "second",
            "input": {}
        }"#;

        let request: SavePayrollRequest = serde_json::from_str(json).unwrap();
        let key = request.key();
        assert_eq!(key.employee_id, "emp_001");
        assert_eq!(key.period.month, 6);
        assert_eq!(key.period.half, PayPeriodHalf::Second);
    }

    #[test]
    fn test_candidate_request_defaults_to_first_stage() {
        let json = r#"{
            "id": "cand_001",
            "name": "John Doe",
            "position": "Software Engineer",
            "applied_on": "2025-06-15"
        }"#;

        let request: SaveCandidateRequest = serde_json::from_str(json).unwrap();
        let candidate: Candidate = request.into();
        assert_eq!(candidate.stage, PipelineStage::NewApplications);
        assert_eq!(candidate.job_id, None);
    }

    #[test]
    fn test_employee_conversion() {
        let request = SaveEmployeeRequest {
            id: "emp_001".to_string(),
            name: "Maria Santos".to_string(),
            monthly_salary: Decimal::from_str("26000").unwrap(),
        };

        let employee: Employee = request.into();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Maria Santos");
    }
}
