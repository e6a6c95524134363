//! Payroll runs.
//!
//! A [`PayrollRun`] is the set of payroll lines for one period, one per
//! active employee in roster order. It is an immutable value: every change
//! (roster, period, a single input) produces a new run in which the affected
//! lines are recomputed from their inputs.
//!
//! Lines are independent of each other, so recomputation order does not
//! matter.

use std::collections::HashMap;

use tracing::debug;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, InputDelta, PayrollLine, PayrollLineInput, PayrollStatement, PeriodConfig,
    PeriodDays, Roster, StatementEntry, StatementTotals,
};

use super::{apply_input, compute_payroll_line_with_rates};

/// The payroll lines of one period.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::calculation::PayrollRun;
/// use rol_pagos_engine::config::StatutoryRates;
/// use rol_pagos_engine::models::{Employee, InputDelta, InputField, PeriodConfig, Roster};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let roster = Roster::new(vec![
///     Employee::new("emp-001", Decimal::from(470), Some(today), today),
///     Employee::new("emp-002", Decimal::from(900), Some(today), today),
/// ])?;
/// let period = PeriodConfig::for_cutoff("Acme", today);
///
/// let run = PayrollRun::start(period, &roster, StatutoryRates::default())?;
/// assert_eq!(run.lines().len(), 2);
///
/// let run = run.with_input(
///     &roster,
///     "emp-002",
///     InputDelta { field: InputField::DaysWorked, value: Decimal::from(15) },
/// )?;
/// assert_eq!(run.line("emp-002").unwrap().amounts().prorated_salary, Decimal::from(450));
/// # Ok::<(), rol_pagos_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRun {
    period: PeriodConfig,
    period_days: PeriodDays,
    rates: StatutoryRates,
    lines: Vec<PayrollLine>,
}

impl PayrollRun {
    /// Starts a run with a seeded line for every active employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriodLength`] if the period has fewer
    /// than one day, [`EngineError::InvalidConfig`] if the rates are
    /// unusable, or [`EngineError::AmountOverflow`] if a line's amounts
    /// exceed the range of decimal arithmetic.
    pub fn start(
        period: PeriodConfig,
        roster: &Roster,
        rates: StatutoryRates,
    ) -> EngineResult<Self> {
        Self::from_inputs(period, roster, rates, &HashMap::new())
    }

    /// Starts a run using previously entered inputs where available and
    /// seeded inputs elsewhere.
    ///
    /// Inputs for inactive employees are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEmployee`] if an input is keyed by an
    /// identity missing from the roster, plus the errors of
    /// [`PayrollRun::start`].
    pub fn from_inputs(
        period: PeriodConfig,
        roster: &Roster,
        rates: StatutoryRates,
        inputs: &HashMap<String, PayrollLineInput>,
    ) -> EngineResult<Self> {
        let period_days = period.period_days()?;
        rates.validate()?;

        for employee_id in inputs.keys() {
            let employee = roster.get(employee_id)?;
            if !employee.active {
                debug!(employee_id = %employee_id, "Discarding input for inactive employee");
            }
        }

        let lines =
            Self::build_lines(roster, period_days, &rates, |id| inputs.get(id).copied())?;
        debug!(
            period = %period.period_label,
            days_in_period = %period_days,
            lines = lines.len(),
            "Payroll run computed"
        );

        Ok(Self {
            period,
            period_days,
            rates,
            lines,
        })
    }

    /// Reconciles the run with a new roster.
    ///
    /// Employees that stayed active keep their inputs and are recomputed
    /// against their new snapshot; newly active employees get a seeded line;
    /// removed or deactivated employees lose theirs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountOverflow`] if a recomputed line exceeds
    /// the range of decimal arithmetic.
    pub fn with_roster(&self, roster: &Roster) -> EngineResult<Self> {
        let lines = Self::build_lines(roster, self.period_days, &self.rates, |id| {
            self.line(id).map(|line| *line.input())
        })?;
        debug!(
            before = self.lines.len(),
            after = lines.len(),
            "Payroll run reconciled with roster"
        );

        Ok(Self {
            period: self.period.clone(),
            period_days: self.period_days,
            rates: self.rates.clone(),
            lines,
        })
    }

    /// Replaces the period and recomputes every line.
    ///
    /// Entered values, including days worked, are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriodLength`] if the new period has
    /// fewer than one day, or [`EngineError::AmountOverflow`] if a
    /// recomputed line exceeds the range of decimal arithmetic.
    pub fn with_period(&self, period: PeriodConfig, roster: &Roster) -> EngineResult<Self> {
        let period_days = period.period_days()?;
        let lines = Self::build_lines(roster, period_days, &self.rates, |id| {
            self.line(id).map(|line| *line.input())
        })?;

        Ok(Self {
            period,
            period_days,
            rates: self.rates.clone(),
            lines,
        })
    }

    /// Applies a single-field edit to one employee's line.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEmployee`] if the employee has no line
    /// in this run or is missing from the roster.
    pub fn with_input(
        &self,
        roster: &Roster,
        employee_id: &str,
        delta: InputDelta,
    ) -> EngineResult<Self> {
        let position = self
            .lines
            .iter()
            .position(|line| line.employee_id() == employee_id)
            .ok_or_else(|| EngineError::UnknownEmployee {
                employee_id: employee_id.to_string(),
            })?;
        let employee = roster.get(employee_id)?;

        let mut lines = self.lines.clone();
        lines[position] = apply_input(&lines[position], employee, delta, &self.rates)?;

        Ok(Self {
            period: self.period.clone(),
            period_days: self.period_days,
            rates: self.rates.clone(),
            lines,
        })
    }

    /// The period of this run.
    pub fn period(&self) -> &PeriodConfig {
        &self.period
    }

    /// The validated day count of the period.
    pub fn period_days(&self) -> PeriodDays {
        self.period_days
    }

    /// The statutory rates lines are computed with.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// All lines in roster order.
    pub fn lines(&self) -> &[PayrollLine] {
        &self.lines
    }

    /// The line of one employee, if present.
    pub fn line(&self, employee_id: &str) -> Option<&PayrollLine> {
        self.lines.iter().find(|line| line.employee_id() == employee_id)
    }

    /// Builds the numbered statement for presentation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEmployee`] if a line's employee is
    /// missing from `roster`.
    pub fn statement(&self, roster: &Roster) -> EngineResult<PayrollStatement> {
        let entries = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let employee = roster.get(line.employee_id())?;
                Ok(StatementEntry {
                    number: index + 1,
                    full_name: employee.full_name(),
                    job_title: employee.job_title.clone(),
                    accumulates_reserve_fund: employee.accumulates_reserve_fund,
                    monthly_decimos: employee.monthly_decimos,
                    line: line.clone(),
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(PayrollStatement {
            company_name: self.period.company_name.clone(),
            period_label: self.period.period_label.clone(),
            cutoff_date: self.period.cutoff_date,
            days_in_period: self.period_days,
            totals: StatementTotals::from_lines(&self.lines)?,
            entries,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    fn build_lines<F>(
        roster: &Roster,
        period_days: PeriodDays,
        rates: &StatutoryRates,
        existing_input: F,
    ) -> EngineResult<Vec<PayrollLine>>
    where
        F: Fn(&str) -> Option<PayrollLineInput>,
    {
        roster
            .active()
            .map(|employee: &Employee| {
                let input = existing_input(employee.id())
                    .unwrap_or_else(|| PayrollLineInput::seeded(period_days));
                compute_payroll_line_with_rates(employee, &input, period_days, rates)
            })
            .collect::<EngineResult<Vec<_>>>()
    }
}
