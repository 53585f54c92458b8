//! Stored record models.
//!
//! These are the documents the record store keeps: one payroll record per
//! employee and pay period, and one basic-pay record per employee and
//! calendar month (the input to thirteenth-month pay).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollResult, PeriodKey};

/// A persisted payroll calculation for one employee and pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the stored record. Stable across repeat saves
    /// of the same key.
    pub record_id: Uuid,
    /// The key the record is stored under.
    pub key: PeriodKey,
    /// The computed breakdown.
    pub result: PayrollResult,
    /// When the record was last written.
    pub saved_at: DateTime<Utc>,
}

/// A stored basic-pay figure for one employee and calendar month.
///
/// Basic pay is the gross salary for the month before allowances and
/// before deduction or addition adjustments. Exactly one record exists per
/// `(employee_id, year, month)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPayRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Calendar year of the bucket.
    pub year: i32,
    /// Calendar month of the bucket, 1 through 12.
    pub month: u32,
    /// Basic pay for the month.
    pub amount: Decimal,
}
