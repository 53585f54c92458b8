//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee record as the payroll core sees it.
///
/// The original system carried several alternate name fields merged with
/// fallback chains; this is the one canonical schema, normalized at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's monthly salary.
    pub monthly_salary: Decimal,
}
