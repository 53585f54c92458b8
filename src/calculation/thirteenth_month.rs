//! Thirteenth-month pay computation.
//!
//! Aggregates stored basic-pay figures over a rolling twelve-month window
//! (December of the prior year through November of the target year) and
//! divides the total by twelve. Finding no records in the window is
//! reported as [`NoDataFound`], never as a silent zero.
//!
//! [`NoDataFound`]: crate::error::EngineError::NoDataFound

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::BasicPayRecord;

const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The December-to-November reference window for a target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirteenthMonthWindow {
    /// The target year; the window runs from December of `year - 1`
    /// through November of `year`.
    pub year: i32,
}

impl ThirteenthMonthWindow {
    /// Returns true if the `(year, month)` bucket falls inside the window.
    pub fn contains(&self, year: i32, month: u32) -> bool {
        let prior_december = self
            .year
            .checked_sub(1)
            .is_some_and(|prior| year == prior && month == 12);
        prior_december || (year == self.year && (1..=11).contains(&month))
    }
}

/// The result of a thirteenth-month pay computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThirteenthMonthResult {
    /// Sum of basic pay over the window.
    pub total_basic_pay: Decimal,
    /// The number of monthly buckets that held a record.
    pub months_counted: u32,
    /// The thirteenth-month pay: total basic pay divided by twelve.
    pub amount: Decimal,
}

/// Computes thirteenth-month pay for one employee from stored basic-pay
/// records.
///
/// Records outside the window are ignored. The window requires at most one
/// record per `(year, month)` bucket; a duplicated bucket is rejected with
/// [`InvalidInput`] rather than double-counted. Zero qualifying records is
/// [`NoDataFound`].
///
/// [`InvalidInput`]: crate::error::EngineError::InvalidInput
/// [`NoDataFound`]: crate::error::EngineError::NoDataFound
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_thirteenth_month, ThirteenthMonthWindow};
/// use payroll_engine::models::BasicPayRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records: Vec<BasicPayRecord> = (1..=11)
///     .map(|month| BasicPayRecord {
///         employee_id: "emp_001".to_string(),
///         year: 2025,
///         month,
///         amount: Decimal::from_str("24000").unwrap(),
///     })
///     .chain(std::iter::once(BasicPayRecord {
///         employee_id: "emp_001".to_string(),
///         year: 2024,
///         month: 12,
///         amount: Decimal::from_str("24000").unwrap(),
///     }))
///     .collect();
///
/// let window = ThirteenthMonthWindow { year: 2025 };
/// let result = calculate_thirteenth_month("emp_001", &records, window).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("24000").unwrap());
/// ```
pub fn calculate_thirteenth_month(
    employee_id: &str,
    records: &[BasicPayRecord],
    window: ThirteenthMonthWindow,
) -> EngineResult<ThirteenthMonthResult> {
    let mut seen: Vec<(i32, u32)> = Vec::new();
    let mut total = Decimal::ZERO;

    for record in records {
        if record.employee_id != employee_id || !window.contains(record.year, record.month) {
            continue;
        }
        let bucket = (record.year, record.month);
        if seen.contains(&bucket) {
            return Err(EngineError::InvalidInput {
                field: "basic_pay".to_string(),
                message: format!(
                    "duplicate basic pay record for {}-{:02}",
                    record.year, record.month
                ),
            });
        }
        seen.push(bucket);
        total += record.amount;
    }

    if seen.is_empty() {
        return Err(EngineError::NoDataFound {
            employee_id: employee_id.to_string(),
            year: window.year,
        });
    }

    Ok(ThirteenthMonthResult {
        total_basic_pay: total,
        months_counted: seen.len() as u32,
        amount: total / TWELVE,
    })
}
