//! Payroll statement models.
//!
//! This module contains the [`PayrollStatement`] type, the ordered rendering
//! of a period's payroll lines with per-employee display data and totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::{PayrollLine, PeriodDays};

/// One numbered row of a payroll statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    /// Row number, starting at 1.
    pub number: usize,
    /// Last names followed by first names.
    pub full_name: String,
    /// The employee's job title.
    pub job_title: String,
    /// Whether the employee elected monthly reserve-fund accrual.
    pub accumulates_reserve_fund: bool,
    /// Whether the employee elected monthly décimos.
    pub monthly_decimos: bool,
    /// The computed line.
    pub line: PayrollLine,
}

/// Column totals across every line of a statement.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::models::StatementTotals;
/// use rust_decimal::Decimal;
///
/// let totals = StatementTotals::from_lines(std::iter::empty())?;
/// assert_eq!(totals.employee_count, 0);
/// assert_eq!(totals.net_pay, Decimal::ZERO);
/// # Ok::<(), rol_pagos_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatementTotals {
    /// Number of lines on the statement.
    pub employee_count: usize,
    /// Sum of total earned.
    pub total_earned: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of reserve-fund accruals.
    pub reserve_fund_accrual: Decimal,
    /// Sum of social-security deposits.
    pub social_security_deposit: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
}

impl StatementTotals {
    /// Sums the given lines.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmountOverflow`] if a column total exceeds the
    /// range of decimal arithmetic.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a PayrollLine>) -> EngineResult<Self> {
        lines.into_iter().try_fold(Self::default(), |totals, line| {
            let amounts = line.amounts();
            Ok(Self {
                employee_count: totals.employee_count + 1,
                total_earned: add(totals.total_earned, amounts.total_earned, "total_earned")?,
                total_deductions: add(
                    totals.total_deductions,
                    amounts.total_deductions,
                    "total_deductions",
                )?,
                reserve_fund_accrual: add(
                    totals.reserve_fund_accrual,
                    amounts.reserve_fund_accrual,
                    "reserve_fund_accrual",
                )?,
                social_security_deposit: add(
                    totals.social_security_deposit,
                    line.input().social_security_deposit,
                    "social_security_deposit",
                )?,
                net_pay: add(totals.net_pay, amounts.net_pay, "net_pay")?,
            })
        })
    }
}

fn add(total: Decimal, amount: Decimal, field: &'static str) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or(EngineError::AmountOverflow { field })
}

/// A period's payroll, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollStatement {
    /// Company the payroll is issued for.
    pub company_name: String,
    /// Month label of the period.
    pub period_label: String,
    /// Cutoff date of the period.
    pub cutoff_date: NaiveDate,
    /// Days in the period.
    pub days_in_period: PeriodDays,
    /// One entry per active employee, in roster order.
    pub entries: Vec<StatementEntry>,
    /// Column totals.
    pub totals: StatementTotals,
    /// Version of the engine that produced the statement.
    pub engine_version: String,
}
