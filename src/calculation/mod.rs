//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for a semi-monthly
//! pay period: pay-rate derivation, attendance deductions, premium
//! additions (overtime, night differential, special holiday, sick leave),
//! government contribution lookups, withholding tax, the net-pay
//! aggregation, and the auxiliary thirteenth-month pay computation.

mod attendance;
mod contributions;
mod income_tax;
mod net_pay;
mod premiums;
mod rates;
mod thirteenth_month;

pub use attendance::{absences_deduction, late_deduction};
pub use contributions::{
    ContributionSet, pag_ibig_contribution, phil_health_contribution, sss_contribution,
};
pub use income_tax::{taxable_income, withholding_tax};
pub use net_pay::calculate_payroll;
pub use premiums::{
    NIGHT_DIFFERENTIAL_RATE, OVERTIME_MULTIPLIER, SPECIAL_HOLIDAY_RATE, night_differential_pay,
    overtime_pay, sick_leave_pay, special_holiday_pay,
};
pub use rates::{HOURS_PER_DAY, WORKING_DAYS_PER_MONTH, daily_rate, hourly_rate};
pub use thirteenth_month::{
    ThirteenthMonthResult, ThirteenthMonthWindow, calculate_thirteenth_month,
};
