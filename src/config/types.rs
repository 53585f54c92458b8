//! Statutory configuration types.
//!
//! These structs mirror the YAML files under `config/ph/` and carry the
//! table-completeness checks the loader runs before a configuration is
//! accepted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One band of the SSS contribution schedule.
///
/// Bands are half-open: a salary `s` falls in the band when
/// `salary_from <= s < salary_to`. The final band has no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SssBand {
    /// Inclusive lower salary bound.
    pub salary_from: Decimal,
    /// Exclusive upper salary bound; `None` for the open-ended top band.
    pub salary_to: Option<Decimal>,
    /// The fixed contribution for salaries in this band.
    pub contribution: Decimal,
}

/// The SSS contribution schedule: a monotonic step function of salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SssTable {
    /// The contribution bands, ascending by salary.
    pub bands: Vec<SssBand>,
}

impl SssTable {
    /// Looks up the contribution for a monthly salary.
    ///
    /// A validated table is total over the non-negative salaries, so a miss
    /// indicates a broken table; it fails with
    /// [`EngineError::ContributionGap`] rather than defaulting. Silent
    /// defaults previously masked table-completeness bugs.
    pub fn contribution_for(&self, salary: Decimal) -> EngineResult<Decimal> {
        self.bands
            .iter()
            .find(|band| {
                salary >= band.salary_from
                    && band.salary_to.is_none_or(|upper| salary < upper)
            })
            .map(|band| band.contribution)
            .ok_or(EngineError::ContributionGap { salary })
    }

    /// Checks that the table is a total, monotonic step function: bands
    /// start at zero, are contiguous with no gap or overlap, end with an
    /// open band, and contributions never decrease.
    pub fn validate(&self) -> Result<(), String> {
        let Some(first) = self.bands.first() else {
            return Err("SSS table has no bands".to_string());
        };
        if !first.salary_from.is_zero() {
            return Err(format!(
                "first SSS band starts at {} instead of 0",
                first.salary_from
            ));
        }

        for (i, pair) in self.bands.windows(2).enumerate() {
            let (band, next) = (&pair[0], &pair[1]);
            match band.salary_to {
                None => {
                    return Err(format!("SSS band {} is open-ended but not last", i));
                }
                Some(upper) => {
                    if upper <= band.salary_from {
                        return Err(format!("SSS band {} has a non-positive width", i));
                    }
                    if next.salary_from != upper {
                        return Err(format!(
                            "SSS bands {} and {} leave a gap or overlap between {} and {}",
                            i,
                            i + 1,
                            upper,
                            next.salary_from
                        ));
                    }
                }
            }
            if next.contribution < band.contribution {
                return Err(format!(
                    "SSS contribution decreases from {} to {} at band {}",
                    band.contribution,
                    next.contribution,
                    i + 1
                ));
            }
        }

        if self.bands.last().is_some_and(|b| b.salary_to.is_some()) {
            return Err("last SSS band must be open-ended".to_string());
        }

        Ok(())
    }
}

/// PhilHealth premium configuration.
///
/// The monthly premium is `salary * premium_rate`; the employee shoulders
/// half of it per semi-monthly period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhilHealthConfig {
    /// The premium rate applied to the monthly salary.
    pub premium_rate: Decimal,
}

/// Pag-IBIG contribution configuration: a flat amount regardless of salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagIbigConfig {
    /// The flat contribution per period.
    pub contribution: Decimal,
}

/// Whether withholding tax is computed or disabled.
///
/// The final variant of the original payroll sheet hard-coded withholding
/// to zero; `Disabled` reproduces that behavior when it must be matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Full progressive bracket calculation (the intended business rule).
    #[default]
    Bracket,
    /// Withholding always returns zero.
    Disabled,
}

/// One withholding tax bracket.
///
/// Only the lower bound and marginal rate are stored; cumulative base
/// amounts are derived, which keeps the tax function continuous at every
/// boundary by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of semi-monthly taxable income.
    pub over: Decimal,
    /// Marginal rate applied to income above `over`.
    pub rate: Decimal,
}

/// Withholding tax configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Whether withholding is computed or disabled.
    #[serde(default)]
    pub withholding: TaxMode,
    /// The progressive brackets, ascending by lower bound.
    pub brackets: Vec<TaxBracket>,
}

impl TaxConfig {
    /// Checks that brackets start at zero, ascend strictly, and carry
    /// non-decreasing rates within [0, 1].
    pub fn validate(&self) -> Result<(), String> {
        let Some(first) = self.brackets.first() else {
            return Err("tax table has no brackets".to_string());
        };
        if !first.over.is_zero() {
            return Err(format!(
                "first tax bracket starts at {} instead of 0",
                first.over
            ));
        }

        for (i, pair) in self.brackets.windows(2).enumerate() {
            let (bracket, next) = (&pair[0], &pair[1]);
            if next.over <= bracket.over {
                return Err(format!("tax bracket {} does not ascend", i + 1));
            }
            if next.rate < bracket.rate {
                return Err(format!("tax rate decreases at bracket {}", i + 1));
            }
        }

        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(format!("tax bracket {} rate is outside [0, 1]", i));
            }
        }

        Ok(())
    }
}

/// The full statutory configuration for payroll computation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryConfig {
    /// SSS contribution schedule.
    pub sss: SssTable,
    /// PhilHealth premium configuration.
    pub philhealth: PhilHealthConfig,
    /// Pag-IBIG contribution configuration.
    pub pagibig: PagIbigConfig,
    /// Withholding tax configuration.
    pub tax: TaxConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn band(from: &str, to: Option<&str>, contribution: &str) -> SssBand {
        SssBand {
            salary_from: dec(from),
            salary_to: to.map(dec),
            contribution: dec(contribution),
        }
    }

    fn small_table() -> SssTable {
        SssTable {
            bands: vec![
                band("0", Some("3250"), "135.00"),
                band("3250", Some("3750"), "175.00"),
                band("3750", None, "200.00"),
            ],
        }
    }

    #[test]
    fn test_valid_table_passes_validation() {
        assert!(small_table().validate().is_ok());
    }

    #[test]
    fn test_lookup_hits_each_band() {
        let table = small_table();
        assert_eq!(table.contribution_for(dec("0")).unwrap(), dec("135.00"));
        assert_eq!(table.contribution_for(dec("3249.99")).unwrap(), dec("135.00"));
        assert_eq!(table.contribution_for(dec("3250")).unwrap(), dec("175.00"));
        assert_eq!(table.contribution_for(dec("99999")).unwrap(), dec("200.00"));
    }

    #[test]
    fn test_gap_between_bands_fails_validation() {
        let table = SssTable {
            bands: vec![
                band("0", Some("3250"), "135.00"),
                band("3300", None, "175.00"),
            ],
        };
        let message = table.validate().unwrap_err();
        assert!(message.contains("gap or overlap"));
    }

    #[test]
    fn test_decreasing_contribution_fails_validation() {
        let table = SssTable {
            bands: vec![
                band("0", Some("3250"), "135.00"),
                band("3250", None, "100.00"),
            ],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_bounded_last_band_fails_validation() {
        let table = SssTable {
            bands: vec![band("0", Some("3250"), "135.00")],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_lookup_gap_is_loud() {
        // Deliberately broken table that passed no validation.
        let table = SssTable {
            bands: vec![band("0", Some("3250"), "135.00")],
        };
        match table.contribution_for(dec("5000")).unwrap_err() {
            EngineError::ContributionGap { salary } => assert_eq!(salary, dec("5000")),
            other => panic!("Expected ContributionGap, got {:?}", other),
        }
    }

    #[test]
    fn test_tax_config_valid() {
        let tax = TaxConfig {
            withholding: TaxMode::Bracket,
            brackets: vec![
                TaxBracket { over: dec("0"), rate: dec("0") },
                TaxBracket { over: dec("10417"), rate: dec("0.20") },
            ],
        };
        assert!(tax.validate().is_ok());
    }

    #[test]
    fn test_tax_config_must_start_at_zero() {
        let tax = TaxConfig {
            withholding: TaxMode::Bracket,
            brackets: vec![TaxBracket { over: dec("100"), rate: dec("0") }],
        };
        assert!(tax.validate().is_err());
    }

    #[test]
    fn test_tax_mode_defaults_to_bracket() {
        let yaml = "brackets:\n  - over: \"0\"\n    rate: \"0\"\n";
        let tax: TaxConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tax.withholding, TaxMode::Bracket);
    }

    #[test]
    fn test_tax_mode_disabled_deserializes() {
        let yaml = "withholding: disabled\nbrackets:\n  - over: \"0\"\n    rate: \"0\"\n";
        let tax: TaxConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tax.withholding, TaxMode::Disabled);
    }
}
