//! Payroll line calculation.
//!
//! This module derives every monetary amount of a payroll line from the
//! employee's salary and elections, the period length and the entered
//! values. It performs no domain validation of the inputs; the only failure
//! is an amount that does not fit in a [`Decimal`].
//!
//! ## Formulas
//!
//! - prorated salary = base salary / days in period × days worked
//! - overtime 50% = base salary / monthly hours × hours × 1.5
//! - overtime 100% = base salary / monthly hours × hours × 2
//! - thirteenth = (prorated + overtime) / 12
//! - fourteenth = (reference wage / monthly hours × daily hours × days worked) / 12
//! - personal contribution = (prorated + overtime + bonus) × 9.45%
//! - reserve fund = (prorated + overtime) / 12, only when elected
//!
//! Products are taken before quotients so that exact cases stay exact in
//! decimal arithmetic.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollAmounts, PayrollLine, PayrollLineInput, PeriodDays};

/// Computes a payroll line with the default statutory rates.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] if an amount exceeds the range
/// of [`Decimal`].
///
/// # Examples
///
/// ```
/// use rol_pagos_engine::calculation::compute_payroll_line;
/// use rol_pagos_engine::models::{Employee, PayrollLineInput, PeriodDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let employee = Employee::new("emp-001", Decimal::from(470), Some(today), today);
/// let days = PeriodDays::new(30).unwrap();
///
/// let line = compute_payroll_line(&employee, &PayrollLineInput::seeded(days), days)?;
/// let amounts = line.amounts();
///
/// assert_eq!(amounts.prorated_salary, Decimal::from(470));
/// assert_eq!(amounts.thirteenth_bonus_accrual.round_dp(2), Decimal::from_str("39.17").unwrap());
/// assert_eq!(amounts.personal_contribution, Decimal::from_str("44.415").unwrap());
/// assert_eq!(amounts.reserve_fund_accrual, Decimal::ZERO);
/// # Ok::<(), rol_pagos_engine::error::EngineError>(())
/// ```
pub fn compute_payroll_line(
    employee: &Employee,
    input: &PayrollLineInput,
    days_in_period: PeriodDays,
) -> EngineResult<PayrollLine> {
    compute_payroll_line_with_rates(employee, input, days_in_period, &StatutoryRates::default())
}

/// Computes a payroll line with explicit statutory rates.
///
/// `rates` must have passed [`StatutoryRates::validate`].
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] if an amount exceeds the range
/// of [`Decimal`].
pub fn compute_payroll_line_with_rates(
    employee: &Employee,
    input: &PayrollLineInput,
    days_in_period: PeriodDays,
    rates: &StatutoryRates,
) -> EngineResult<PayrollLine> {
    let amounts = compute_amounts(
        employee.base_salary,
        employee.accumulates_reserve_fund,
        input,
        days_in_period,
        rates,
    )?;

    Ok(PayrollLine::new(
        employee.id().to_string(),
        days_in_period,
        employee.base_salary,
        *input,
        amounts,
    ))
}

fn checked(value: Option<Decimal>, field: &'static str) -> EngineResult<Decimal> {
    value.ok_or(EngineError::AmountOverflow { field })
}

fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    field: &'static str,
) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked(acc.checked_add(value), field))
}

fn compute_amounts(
    base_salary: Decimal,
    accumulates_reserve_fund: bool,
    input: &PayrollLineInput,
    days_in_period: PeriodDays,
    rates: &StatutoryRates,
) -> EngineResult<PayrollAmounts> {
    let prorated_salary = checked(
        base_salary
            .checked_mul(input.days_worked)
            .and_then(|v| v.checked_div(days_in_period.as_decimal())),
        "prorated_salary",
    )?;
    let overtime_pay_50 = checked(
        base_salary
            .checked_mul(input.overtime_hours_50)
            .and_then(|v| v.checked_mul(rates.overtime_50_multiplier))
            .and_then(|v| v.checked_div(rates.standard_monthly_hours)),
        "overtime_pay_50",
    )?;
    let overtime_pay_100 = checked(
        base_salary
            .checked_mul(input.overtime_hours_100)
            .and_then(|v| v.checked_mul(rates.overtime_100_multiplier))
            .and_then(|v| v.checked_div(rates.standard_monthly_hours)),
        "overtime_pay_100",
    )?;

    // Salary plus overtime is the base for the thirteenth, the contribution
    // and the reserve fund.
    let worked_pay = checked_sum(
        [prorated_salary, overtime_pay_50, overtime_pay_100],
        "thirteenth_bonus_accrual",
    )?;

    let thirteenth_bonus_accrual = checked(
        worked_pay.checked_div(rates.accrual_months),
        "thirteenth_bonus_accrual",
    )?;
    let fourteenth_bonus_accrual = checked(
        rates
            .reference_wage
            .checked_mul(rates.daily_hours)
            .and_then(|v| v.checked_mul(input.days_worked))
            .and_then(|v| v.checked_div(rates.standard_monthly_hours))
            .and_then(|v| v.checked_div(rates.accrual_months)),
        "fourteenth_bonus_accrual",
    )?;

    let total_earned = checked_sum(
        [
            worked_pay,
            input.bonus,
            input.per_diem,
            thirteenth_bonus_accrual,
            fourteenth_bonus_accrual,
        ],
        "total_earned",
    )?;

    let personal_contribution = checked(
        worked_pay
            .checked_add(input.bonus)
            .and_then(|v| v.checked_mul(rates.personal_contribution_rate)),
        "personal_contribution",
    )?;

    let total_deductions = checked_sum(
        [
            input.employee_loans,
            input.salary_advance,
            input.income_tax_withholding,
            personal_contribution,
            input.other_deductions,
            input.social_security_loans,
        ],
        "total_deductions",
    )?;

    let subtotal = checked(total_earned.checked_sub(total_deductions), "subtotal")?;

    let reserve_fund_accrual = if accumulates_reserve_fund {
        thirteenth_bonus_accrual
    } else {
        Decimal::ZERO
    };

    let net_pay = checked(
        subtotal
            .checked_add(reserve_fund_accrual)
            .and_then(|v| v.checked_sub(input.social_security_deposit)),
        "net_pay",
    )?;

    Ok(PayrollAmounts {
        prorated_salary,
        overtime_pay_50,
        overtime_pay_100,
        thirteenth_bonus_accrual,
        fourteenth_bonus_accrual,
        total_earned,
        personal_contribution,
        total_deductions,
        subtotal,
        reserve_fund_accrual,
        net_pay,
    })
}
