//! Deductions from attendance.
//!
//! Whole days absent are charged at the daily rate; minutes late are
//! charged at the hourly rate, pro-rated by the fraction of an hour.

use rust_decimal::Decimal;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Deduction for whole days absent.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::absences_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let daily = Decimal::from_str("1000").unwrap();
/// assert_eq!(absences_deduction(2, daily), Decimal::from_str("2000").unwrap());
/// ```
pub fn absences_deduction(absences: u32, daily_rate: Decimal) -> Decimal {
    Decimal::from(absences) * daily_rate
}

/// Deduction for minutes late, pro-rated against the hourly rate.
pub fn late_deduction(late_minutes: u32, hourly_rate: Decimal) -> Decimal {
    Decimal::from(late_minutes) / MINUTES_PER_HOUR * hourly_rate
}
