//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PeriodConfig;

/// Statutory constants used by the payroll line formulas.
///
/// The defaults are the values in force for Ecuadorian payroll: a reference
/// wage of 470, 240 standard monthly hours, 8 hour days, 50%/100% overtime
/// premiums, a 9.45% personal contribution and twelve-month accruals.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(rates.reference_wage, Decimal::from(470));
/// assert_eq!(rates.personal_contribution_rate, Decimal::new(945, 4));
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryRates {
    /// Unified basic wage the fourteenth bonus is based on.
    pub reference_wage: Decimal,
    /// Hours in a standard working month; the hourly-rate divisor.
    pub standard_monthly_hours: Decimal,
    /// Hours in a standard working day.
    pub daily_hours: Decimal,
    /// Multiplier for overtime paid at 50%.
    pub overtime_50_multiplier: Decimal,
    /// Multiplier for overtime paid at 100%.
    pub overtime_100_multiplier: Decimal,
    /// Employee-side social-security contribution rate.
    pub personal_contribution_rate: Decimal,
    /// Months an annual entitlement is spread over.
    pub accrual_months: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            reference_wage: Decimal::from(470),
            standard_monthly_hours: Decimal::from(240),
            daily_hours: Decimal::from(8),
            overtime_50_multiplier: Decimal::new(15, 1),
            overtime_100_multiplier: Decimal::from(2),
            personal_contribution_rate: Decimal::new(945, 4),
            accrual_months: Decimal::from(12),
        }
    }
}

impl StatutoryRates {
    /// Checks that the divisors are usable.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("standard_monthly_hours", self.standard_monthly_hours),
            ("accrual_months", self.accrual_months),
        ] {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    period: PeriodConfig,
    rates: StatutoryRates,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(period: PeriodConfig, rates: StatutoryRates) -> Self {
        Self { period, rates }
    }

    /// Returns the default period.
    pub fn period(&self) -> &PeriodConfig {
        &self.period
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }
}
