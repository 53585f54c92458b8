//! Statutory configuration loading and management.
//!
//! This module loads the government contribution schedules and withholding
//! tax brackets from YAML files, validating table completeness at load time.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph").unwrap();
//! println!("SSS bands loaded: {}", config.config().sss.bands.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PagIbigConfig, PhilHealthConfig, SssBand, SssTable, StatutoryConfig, TaxBracket, TaxConfig,
    TaxMode,
};
