//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod payroll_input;
mod payroll_result;
mod records;
mod recruitment;

pub use employee::Employee;
pub use pay_period::{PayPeriod, PayPeriodHalf, PeriodKey};
pub use payroll_input::PayrollInput;
pub use payroll_result::PayrollResult;
pub use records::{BasicPayRecord, PayrollRecord};
pub use recruitment::{Candidate, JobPosting, JobStatus, PipelineStage};
