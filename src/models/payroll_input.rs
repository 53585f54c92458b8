//! Payroll input model.
//!
//! This module defines the [`PayrollInput`] struct holding everything a
//! semi-monthly pay calculation needs for one employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The inputs to a single semi-monthly pay calculation.
///
/// All monetary and hour fields default to zero when absent, matching the
/// form the original payroll sheet presented. Attendance counts are unsigned
/// by type; the remaining decimal fields are validated by [`validate`].
///
/// [`validate`]: PayrollInput::validate
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayrollInput {
///     monthly_salary: Decimal::from_str("15000").unwrap(),
///     ..PayrollInput::default()
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee's monthly salary.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Non-taxable allowance added to net pay.
    #[serde(default)]
    pub non_taxable_allowance: Decimal,
    /// Whole days absent during the period.
    #[serde(default)]
    pub absences: u32,
    /// Minutes late during the period.
    #[serde(default)]
    pub late_minutes: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked within the night differential window.
    #[serde(default)]
    pub night_differential_hours: Decimal,
    /// Hours worked on a special (non-working) holiday.
    #[serde(default)]
    pub special_holiday_hours: Decimal,
    /// Paid sick leave days.
    #[serde(default)]
    pub sick_leave_days: Decimal,
    /// Signed manual correction added to net pay.
    #[serde(default)]
    pub adjustments: Decimal,
}

impl PayrollInput {
    /// Validates the input before computation.
    ///
    /// Every field except `adjustments` must be non-negative. The original
    /// sheet coerced bad input to zero; here a negative value is rejected
    /// with [`EngineError::InvalidInput`] so the caller decides the default.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("monthly_salary", self.monthly_salary),
            ("non_taxable_allowance", self.non_taxable_allowance),
            ("overtime_hours", self.overtime_hours),
            ("night_differential_hours", self.night_differential_hours),
            ("special_holiday_hours", self.special_holiday_hours),
            ("sick_leave_days", self.sick_leave_days),
        ];

        for (field, value) in non_negative {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}
