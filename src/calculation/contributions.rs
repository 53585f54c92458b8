//! Government contribution calculations.
//!
//! SSS is a step-table lookup on the monthly salary, PhilHealth is a flat
//! percentage split between employer and employee, and Pag-IBIG is a flat
//! amount per period.

use rust_decimal::Decimal;

use crate::config::{PagIbigConfig, PhilHealthConfig, SssTable, StatutoryConfig};
use crate::error::EngineResult;

/// The three statutory contributions for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionSet {
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution (employee share).
    pub phil_health: Decimal,
    /// Pag-IBIG contribution.
    pub pag_ibig: Decimal,
}

impl ContributionSet {
    /// Looks up or computes all three contributions for a monthly salary.
    pub fn for_salary(salary: Decimal, config: &StatutoryConfig) -> EngineResult<Self> {
        Ok(Self {
            sss: sss_contribution(salary, &config.sss)?,
            phil_health: phil_health_contribution(salary, &config.philhealth),
            pag_ibig: pag_ibig_contribution(&config.pagibig),
        })
    }

    /// The combined contribution total.
    pub fn total(&self) -> Decimal {
        self.sss + self.phil_health + self.pag_ibig
    }
}

/// Looks up the SSS contribution for a monthly salary.
///
/// Fails with [`ContributionGap`] if no band covers the salary; a
/// validated table makes that unreachable, and a silent default is exactly
/// the failure mode the lookup is guarding against.
///
/// [`ContributionGap`]: crate::error::EngineError::ContributionGap
pub fn sss_contribution(salary: Decimal, table: &SssTable) -> EngineResult<Decimal> {
    table.contribution_for(salary)
}

/// The PhilHealth employee share: half the monthly premium.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::phil_health_contribution;
/// use payroll_engine::config::PhilHealthConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PhilHealthConfig { premium_rate: Decimal::from_str("0.05").unwrap() };
/// let salary = Decimal::from_str("15000").unwrap();
/// assert_eq!(
///     phil_health_contribution(salary, &config),
///     Decimal::from_str("375").unwrap()
/// );
/// ```
pub fn phil_health_contribution(salary: Decimal, config: &PhilHealthConfig) -> Decimal {
    salary * config.premium_rate / Decimal::TWO
}

/// The Pag-IBIG contribution: a flat amount regardless of salary.
pub fn pag_ibig_contribution(config: &PagIbigConfig) -> Decimal {
    config.contribution
}
