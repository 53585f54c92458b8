//! Payroll result model.
//!
//! This module defines the [`PayrollResult`] struct capturing every derived
//! component of a semi-monthly pay calculation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The complete breakdown of one semi-monthly pay calculation.
///
/// A `PayrollResult` is recomputed in full on every invocation and never
/// mutated afterwards; it is a pure function of the input and the statutory
/// configuration. No component is rounded; rounding to two decimal places
/// happens only when amounts are formatted for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,

    /// Pay per working day, derived from the monthly salary.
    pub daily_rate: Decimal,
    /// Pay per hour, derived from the daily rate.
    pub hourly_rate: Decimal,

    /// Deduction for whole days absent.
    pub absences_deduction: Decimal,
    /// Deduction for minutes late.
    pub late_deduction: Decimal,

    /// Overtime premium pay.
    pub overtime_pay: Decimal,
    /// Night differential premium pay.
    pub night_differential_pay: Decimal,
    /// Special holiday premium pay.
    pub special_holiday_pay: Decimal,
    /// Paid sick leave.
    pub sick_leave_pay: Decimal,

    /// SSS contribution for the period.
    pub sss_contribution: Decimal,
    /// PhilHealth contribution for the period.
    pub phil_health_contribution: Decimal,
    /// Pag-IBIG contribution for the period.
    pub pag_ibig_contribution: Decimal,

    /// Semi-monthly income subject to withholding tax.
    pub taxable_income: Decimal,
    /// Withholding tax for the period.
    pub income_tax: Decimal,

    /// Sum of every deduction component.
    pub total_deductions: Decimal,
    /// Final net pay for the period.
    pub net_pay: Decimal,
}
