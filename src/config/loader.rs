//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodConfig, PeriodDays};

use super::types::{EngineConfig, StatutoryRates};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── period.yaml           # Default pay period
/// └── statutory_rates.yaml  # Statutory constants
/// ```
///
/// # Example
///
/// ```no_run
/// use rol_pagos_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Company: {}", loader.period().company_name);
/// println!("Days: {}", loader.period_days());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    period_days: PeriodDays,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The period has fewer than one day
    /// - A statutory divisor is not positive
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let period = Self::load_yaml::<PeriodConfig>(&path.join("period.yaml"))?;
        let rates = Self::load_yaml::<StatutoryRates>(&path.join("statutory_rates.yaml"))?;

        Self::from_parts(period, rates)
    }

    /// Builds a loader from values already in memory, applying the same
    /// validation as [`ConfigLoader::load`].
    ///
    /// ```
    /// use rol_pagos_engine::config::{ConfigLoader, StatutoryRates};
    /// use rol_pagos_engine::models::PeriodConfig;
    /// use chrono::NaiveDate;
    ///
    /// let period = PeriodConfig::for_cutoff("Acme", NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    /// let loader = ConfigLoader::from_parts(period, StatutoryRates::default())?;
    /// assert_eq!(loader.period_days().get(), 30);
    /// # Ok::<(), rol_pagos_engine::error::EngineError>(())
    /// ```
    pub fn from_parts(period: PeriodConfig, rates: StatutoryRates) -> EngineResult<Self> {
        let period_days = period.period_days()?;
        rates.validate()?;

        Ok(Self {
            config: EngineConfig::new(period, rates),
            period_days,
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default period.
    pub fn period(&self) -> &PeriodConfig {
        self.config.period()
    }

    /// Returns the validated day count of the default period.
    pub fn period_days(&self) -> PeriodDays {
        self.period_days
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }
}
