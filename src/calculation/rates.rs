//! Pay-rate derivation.
//!
//! This module derives the daily and hourly pay rates from a monthly
//! salary. Both are pure functions; a zero salary yields zero rates since
//! the divisors are fixed constants.

use rust_decimal::Decimal;

/// Working days per month used to derive the daily rate.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// Paid hours per working day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Derives the daily rate from a monthly salary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::daily_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("26000").unwrap();
/// assert_eq!(daily_rate(salary), Decimal::from_str("1000").unwrap());
/// ```
pub fn daily_rate(monthly_salary: Decimal) -> Decimal {
    monthly_salary / WORKING_DAYS_PER_MONTH
}

/// Derives the hourly rate from a monthly salary.
pub fn hourly_rate(monthly_salary: Decimal) -> Decimal {
    daily_rate(monthly_salary) / HOURS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_daily_rate_26000() {
        assert_eq!(daily_rate(dec("26000")), dec("1000"));
    }

    #[test]
    fn test_hourly_rate_26000() {
        assert_eq!(hourly_rate(dec("26000")), dec("125"));
    }

    #[test]
    fn test_daily_rate_15000_is_not_rounded() {
        let rate = daily_rate(dec("15000"));
        // 15000 / 26 = 576.923076..., kept at full precision
        assert!(rate > dec("576.92"));
        assert!(rate < dec("576.93"));
    }

    #[test]
    fn test_zero_salary_yields_zero_rates() {
        assert_eq!(daily_rate(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(hourly_rate(Decimal::ZERO), Decimal::ZERO);
    }
}
