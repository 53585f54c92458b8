//! Additions from attendance: overtime, night differential, special
//! holiday, and sick leave pay.
//!
//! Each premium is monotonically increasing in its hour or day input and
//! zero when the input is zero. The night differential base is the monthly
//! salary over eight, not the hourly rate; that is the rule the payroll
//! sheet applied.

use rust_decimal::Decimal;

use super::rates::{HOURS_PER_DAY, WORKING_DAYS_PER_MONTH, daily_rate};

/// Overtime premium multiplier on the hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Night differential rate on the salary-over-eight base.
pub const NIGHT_DIFFERENTIAL_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Special holiday premium rate on the hourly rate.
pub const SPECIAL_HOLIDAY_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Overtime pay: hours at 125% of the hourly rate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("26000").unwrap();
/// let hours = Decimal::from_str("4").unwrap();
/// // 4 * 125 * 1.25 = 625
/// assert_eq!(overtime_pay(salary, hours), Decimal::from_str("625").unwrap());
/// ```
pub fn overtime_pay(monthly_salary: Decimal, overtime_hours: Decimal) -> Decimal {
    overtime_hours * (monthly_salary / WORKING_DAYS_PER_MONTH / HOURS_PER_DAY)
        * OVERTIME_MULTIPLIER
}

/// Night differential pay: 10% of the salary-over-eight base per hour.
pub fn night_differential_pay(monthly_salary: Decimal, night_hours: Decimal) -> Decimal {
    (monthly_salary / HOURS_PER_DAY) * NIGHT_DIFFERENTIAL_RATE * night_hours
}

/// Special holiday pay: hours at 30% of the hourly rate.
pub fn special_holiday_pay(monthly_salary: Decimal, holiday_hours: Decimal) -> Decimal {
    (monthly_salary / WORKING_DAYS_PER_MONTH / HOURS_PER_DAY)
        * SPECIAL_HOLIDAY_RATE
        * holiday_hours
}

/// Sick leave pay: days at the daily rate.
pub fn sick_leave_pay(monthly_salary: Decimal, sick_leave_days: Decimal) -> Decimal {
    sick_leave_days * daily_rate(monthly_salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_overtime_four_hours_at_26000() {
        // hourly 125, premium rate 156.25
        assert_eq!(overtime_pay(dec("26000"), dec("4")), dec("625.0000"));
    }

    #[test]
    fn test_overtime_zero_hours() {
        assert_eq!(overtime_pay(dec("26000"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_night_differential_uses_salary_over_eight() {
        // 26000 / 8 = 3250; 3250 * 0.10 = 325 per hour
        assert_eq!(night_differential_pay(dec("26000"), dec("2")), dec("650.00"));
    }

    #[test]
    fn test_special_holiday_eight_hours_at_26000() {
        // hourly 125 * 0.30 = 37.5 per hour
        assert_eq!(special_holiday_pay(dec("26000"), dec("8")), dec("300.00"));
    }

    #[test]
    fn test_sick_leave_one_day_at_26000() {
        assert_eq!(sick_leave_pay(dec("26000"), dec("1")), dec("1000"));
    }

    #[test]
    fn test_half_day_sick_leave() {
        assert_eq!(sick_leave_pay(dec("26000"), dec("0.5")), dec("500.0"));
    }

    #[test]
    fn test_premiums_are_monotone_in_hours() {
        let salary = dec("18500");
        let less = overtime_pay(salary, dec("2"));
        let more = overtime_pay(salary, dec("3"));
        assert!(more > less);

        let less = night_differential_pay(salary, dec("2"));
        let more = night_differential_pay(salary, dec("3"));
        assert!(more > less);

        let less = special_holiday_pay(salary, dec("2"));
        let more = special_holiday_pay(salary, dec("3"));
        assert!(more > less);
    }

    #[test]
    fn test_zero_salary_zeroes_all_premiums() {
        assert_eq!(overtime_pay(Decimal::ZERO, dec("4")), Decimal::ZERO);
        assert_eq!(night_differential_pay(Decimal::ZERO, dec("4")), Decimal::ZERO);
        assert_eq!(special_holiday_pay(Decimal::ZERO, dec("4")), Decimal::ZERO);
        assert_eq!(sick_leave_pay(Decimal::ZERO, dec("4")), Decimal::ZERO);
    }
}
