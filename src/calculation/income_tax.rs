//! Withholding tax calculation.
//!
//! Taxable income is the semi-monthly basic salary less the statutory
//! contributions. The bracket function applies each marginal rate only to
//! the excess over that bracket's lower bound, so the function is
//! continuous at every boundary and monotonically non-decreasing.

use rust_decimal::Decimal;

use crate::config::{TaxConfig, TaxMode};

use super::contributions::ContributionSet;

/// Semi-monthly income subject to withholding.
///
/// Half the monthly salary, less the period's contributions. Can be
/// negative at very low salaries; the bracket function withholds zero
/// there.
pub fn taxable_income(monthly_salary: Decimal, contributions: &ContributionSet) -> Decimal {
    monthly_salary / Decimal::TWO - contributions.total()
}

/// Computes the withholding tax on semi-monthly taxable income.
///
/// In [`TaxMode::Disabled`] the function returns zero regardless of
/// income, reproducing the stubbed final variant of the original sheet.
/// In [`TaxMode::Bracket`] (the default, and the intended business rule)
/// each bracket's marginal rate is applied to the slice of income that
/// falls inside it.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
/// let taxable = Decimal::from_str("10850").unwrap();
/// // 20% of the 433 above the 10,417 bound
/// assert_eq!(
///     withholding_tax(taxable, &loader.config().tax),
///     Decimal::from_str("86.60").unwrap()
/// );
/// ```
pub fn withholding_tax(taxable: Decimal, config: &TaxConfig) -> Decimal {
    if config.withholding == TaxMode::Disabled {
        return Decimal::ZERO;
    }
    if taxable <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    for (i, bracket) in config.brackets.iter().enumerate() {
        if taxable <= bracket.over {
            break;
        }
        let upper = config
            .brackets
            .get(i + 1)
            .map(|next| next.over.min(taxable))
            .unwrap_or(taxable);
        tax += bracket.rate * (upper - bracket.over);
    }

    tax
}
