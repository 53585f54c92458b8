//! Payroll computation engine for Philippine semi-monthly pay.
//!
//! This crate computes a full semi-monthly pay breakdown (pay rates,
//! attendance deductions, premium additions, SSS/PhilHealth/Pag-IBIG
//! contributions, withholding tax, net pay) from an employee's monthly
//! salary and the attendance adjustments for the period, plus the auxiliary
//! thirteenth-month pay computation over stored basic-pay records and a
//! recruitment pipeline whose stage and applicant counts are derived from
//! the candidate records on every read.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod recruitment;
pub mod store;
