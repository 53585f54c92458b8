//! Pay period model and related types.
//!
//! This module defines the semi-monthly pay period and the key under which
//! payroll records are stored.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The half of the month a pay period covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriodHalf {
    /// The 1st through the 15th.
    First,
    /// The 16th through the end of the month.
    Second,
}

/// A semi-monthly pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PayPeriodHalf};
///
/// let period = PayPeriod {
///     year: 2025,
///     month: 6,
///     half: PayPeriodHalf::First,
/// };
/// assert!(period.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Which half of the month.
    pub half: PayPeriodHalf,
}

impl PayPeriod {
    /// Validates that the month is a real calendar month.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidInput {
                field: "month".to_string(),
                message: format!("{} is not a calendar month", self.month),
            });
        }
        Ok(())
    }
}

/// The key under which a payroll record is stored.
///
/// A repeat save for the same key updates the existing record rather than
/// duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The pay period the record covers.
    pub period: PayPeriod,
}
