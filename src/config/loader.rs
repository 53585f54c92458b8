//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{PagIbigConfig, PhilHealthConfig, SssTable, StatutoryConfig, TaxConfig};

/// Loads and provides access to the statutory configuration.
///
/// The `ConfigLoader` reads one YAML file per concern from a directory and
/// rejects any table that is not total, contiguous, and monotonic before the
/// configuration is accepted.
///
/// # Directory Structure
///
/// ```text
/// config/ph/
/// ├── sss.yaml        # SSS contribution bands
/// ├── philhealth.yaml # PhilHealth premium rate
/// ├── pagibig.yaml    # Pag-IBIG flat contribution
/// └── tax.yaml        # Withholding tax mode and brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
/// let salary = Decimal::from_str("15000").unwrap();
/// let sss = loader.sss_contribution(salary).unwrap();
/// println!("SSS contribution: {}", sss);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads the configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ph")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The SSS table or tax brackets fail validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let sss_path = path.join("sss.yaml");
        let sss = Self::load_yaml::<SssTable>(&sss_path)?;
        if let Err(message) = sss.validate() {
            return Err(EngineError::ConfigParseError {
                path: sss_path.display().to_string(),
                message,
            });
        }

        let philhealth = Self::load_yaml::<PhilHealthConfig>(&path.join("philhealth.yaml"))?;

        let pagibig = Self::load_yaml::<PagIbigConfig>(&path.join("pagibig.yaml"))?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxConfig>(&tax_path)?;
        if let Err(message) = tax.validate() {
            return Err(EngineError::ConfigParseError {
                path: tax_path.display().to_string(),
                message,
            });
        }

        Ok(Self {
            config: StatutoryConfig {
                sss,
                philhealth,
                pagibig,
                tax,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Looks up the SSS contribution for a monthly salary.
    pub fn sss_contribution(&self, salary: Decimal) -> EngineResult<Decimal> {
        self.config.sss.contribution_for(salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxMode;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ph"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_table_minimum_band() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.sss_contribution(dec("0")).unwrap(), dec("135.00"));
        assert_eq!(loader.sss_contribution(dec("3249")).unwrap(), dec("135.00"));
    }

    #[test]
    fn test_shipped_table_mid_band() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.sss_contribution(dec("15000")).unwrap(), dec("750.00"));
    }

    #[test]
    fn test_shipped_table_top_band_is_flat() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let top = loader.sss_contribution(dec("34250")).unwrap();
        assert_eq!(top, dec("1725.00"));
        assert_eq!(loader.sss_contribution(dec("1000000")).unwrap(), top);
    }

    #[test]
    fn test_shipped_philhealth_rate() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().philhealth.premium_rate, dec("0.05"));
    }

    #[test]
    fn test_shipped_pagibig_contribution() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().pagibig.contribution, dec("200.00"));
    }

    #[test]
    fn test_shipped_tax_defaults_to_bracket_mode() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().tax.withholding, TaxMode::Bracket);
        assert_eq!(loader.config().tax.brackets.len(), 6);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("sss.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
