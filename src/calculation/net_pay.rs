//! Net-pay aggregation.
//!
//! This module ties every per-rule calculation together into one pass from
//! [`PayrollInput`] to [`PayrollResult`]. The original sheet recomputed
//! derived state reactively on every keystroke; here the whole breakdown
//! is an explicit pure function of the input and the statutory
//! configuration, with no hidden state and no ordering dependency between
//! fields.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::StatutoryConfig;
use crate::error::EngineResult;
use crate::models::{PayrollInput, PayrollResult};

use super::attendance::{absences_deduction, late_deduction};
use super::contributions::ContributionSet;
use super::income_tax::{taxable_income, withholding_tax};
use super::premiums::{
    night_differential_pay, overtime_pay, sick_leave_pay, special_holiday_pay,
};
use super::rates::{daily_rate, hourly_rate};

/// Computes the full semi-monthly pay breakdown for one input.
///
/// Validates the input, derives rates, computes every deduction and
/// addition, and aggregates net pay in a single pass. No component is
/// rounded; two identical inputs produce bit-identical monetary output.
///
/// # Errors
///
/// - [`InvalidInput`] if any numeric field other than `adjustments` is
///   negative
/// - [`ContributionGap`] if the SSS table fails to cover the salary
///
/// [`InvalidInput`]: crate::error::EngineError::InvalidInput
/// [`ContributionGap`]: crate::error::EngineError::ContributionGap
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
/// let input = PayrollInput {
///     monthly_salary: Decimal::from_str("15000").unwrap(),
///     ..PayrollInput::default()
/// };
/// let result = calculate_payroll(&input, loader.config()).unwrap();
/// assert_eq!(result.net_pay, Decimal::from_str("6175.00").unwrap());
/// ```
pub fn calculate_payroll(
    input: &PayrollInput,
    config: &StatutoryConfig,
) -> EngineResult<PayrollResult> {
    input.validate()?;

    let salary = input.monthly_salary;
    let daily = daily_rate(salary);
    let hourly = hourly_rate(salary);

    let absences = absences_deduction(input.absences, daily);
    let late = late_deduction(input.late_minutes, hourly);

    let overtime = overtime_pay(salary, input.overtime_hours);
    let night_differential = night_differential_pay(salary, input.night_differential_hours);
    let special_holiday = special_holiday_pay(salary, input.special_holiday_hours);
    let sick_leave = sick_leave_pay(salary, input.sick_leave_days);

    let contributions = ContributionSet::for_salary(salary, config)?;
    let taxable = taxable_income(salary, &contributions);
    let income_tax = withholding_tax(taxable, &config.tax);

    let total_deductions = absences + late + contributions.total() + income_tax;

    let semi_monthly_basic = salary / Decimal::TWO;
    let net_pay = semi_monthly_basic
        + input.non_taxable_allowance
        + overtime
        + night_differential
        + special_holiday
        + sick_leave
        + input.adjustments
        - total_deductions;

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        daily_rate: daily,
        hourly_rate: hourly,
        absences_deduction: absences,
        late_deduction: late,
        overtime_pay: overtime,
        night_differential_pay: night_differential,
        special_holiday_pay: special_holiday,
        sick_leave_pay: sick_leave,
        sss_contribution: contributions.sss,
        phil_health_contribution: contributions.phil_health,
        pag_ibig_contribution: contributions.pag_ibig,
        taxable_income: taxable,
        income_tax,
        total_deductions,
        net_pay,
    })
}
