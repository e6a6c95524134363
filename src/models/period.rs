//! Pay period configuration.
//!
//! This module contains [`PeriodConfig`], the company/month identity of a
//! payroll, and [`PeriodDays`], the validated day count every proration is
//! divided by.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Day count used when a period does not specify one.
pub const DEFAULT_DAYS_IN_PERIOD: u32 = 30;

/// Spanish month names used as period labels.
pub const MONTH_LABELS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Number of days in a pay period, guaranteed to be at least one.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::models::PeriodDays;
///
/// assert_eq!(PeriodDays::new(30).unwrap().get(), 30);
/// assert!(PeriodDays::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PeriodDays(u32);

impl PeriodDays {
    /// Validates a raw day count.
    pub fn new(days: i64) -> EngineResult<Self> {
        match u32::try_from(days) {
            Ok(days) if days >= 1 => Ok(Self(days)),
            _ => Err(EngineError::InvalidPeriodLength { days }),
        }
    }

    /// Returns the day count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the day count as a decimal divisor.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for PeriodDays {
    fn default() -> Self {
        Self(DEFAULT_DAYS_IN_PERIOD)
    }
}

impl TryFrom<i64> for PeriodDays {
    type Error = EngineError;

    fn try_from(days: i64) -> EngineResult<Self> {
        Self::new(days)
    }
}

impl fmt::Display for PeriodDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_days_in_period() -> i64 {
    i64::from(DEFAULT_DAYS_IN_PERIOD)
}

/// Company and month identity of a payroll, plus its day count.
///
/// `days_in_period` is kept raw so that invalid values surface as
/// [`EngineError::InvalidPeriodLength`] from [`PeriodConfig::period_days`]
/// rather than as a parse failure.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::models::PeriodConfig;
/// use chrono::NaiveDate;
///
/// let period = PeriodConfig::for_cutoff("Comercial Andina S.A.", NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
/// assert_eq!(period.period_label, "Marzo");
/// assert_eq!(period.period_days().unwrap().get(), 30);
/// assert!(period.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    /// Company the payroll is issued for.
    #[serde(default)]
    pub company_name: String,
    /// Month label, e.g. "Enero".
    #[serde(default)]
    pub period_label: String,
    /// Cutoff date of the period.
    pub cutoff_date: NaiveDate,
    /// Days in the billing period. Not derived from the calendar month.
    #[serde(default = "default_days_in_period")]
    pub days_in_period: i64,
}

impl PeriodConfig {
    /// Builds a 30-day period labelled with the cutoff date's month.
    pub fn for_cutoff(company_name: impl Into<String>, cutoff_date: NaiveDate) -> Self {
        Self {
            company_name: company_name.into(),
            period_label: Self::month_label(cutoff_date.month())
                .unwrap_or_default()
                .to_string(),
            cutoff_date,
            days_in_period: default_days_in_period(),
        }
    }

    /// Returns the Spanish label for a 1-based month number.
    pub fn month_label(month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_LABELS.get(index).copied()
    }

    /// Returns a copy relabelled to another month. The day count resets to
    /// the default.
    pub fn with_period_label(mut self, period_label: impl Into<String>) -> Self {
        self.period_label = period_label.into();
        self.days_in_period = default_days_in_period();
        self
    }

    /// Returns a copy with a different day count. Validation is deferred to
    /// [`PeriodConfig::period_days`].
    pub fn with_days_in_period(mut self, days_in_period: i64) -> Self {
        self.days_in_period = days_in_period;
        self
    }

    /// Validates and returns the day count.
    pub fn period_days(&self) -> EngineResult<PeriodDays> {
        PeriodDays::new(self.days_in_period)
    }

    /// A period is ready for payroll once company and label are filled in.
    pub fn is_complete(&self) -> bool {
        !self.company_name.trim().is_empty() && !self.period_label.trim().is_empty()
    }
}
