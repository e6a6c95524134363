//! Payroll line models.
//!
//! A [`PayrollLineInput`] holds the values entered for one employee in one
//! period. A [`PayrollLine`] pairs that input with every amount derived from
//! it; its fields are private so that derived amounts can only come from a
//! recomputation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PeriodDays;

/// The editable fields of a payroll line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Days actually worked in the period.
    DaysWorked,
    /// Overtime hours paid at a 50% premium.
    #[serde(rename = "overtime_hours_50")]
    OvertimeHours50,
    /// Overtime hours paid at a 100% premium.
    #[serde(rename = "overtime_hours_100")]
    OvertimeHours100,
    /// Discretionary bonus.
    Bonus,
    /// Travel allowance ("viáticos").
    PerDiem,
    /// Repayment of company loans.
    EmployeeLoans,
    /// Salary already advanced.
    SalaryAdvance,
    /// Income tax withheld at source.
    IncomeTaxWithholding,
    /// Any other deduction.
    OtherDeductions,
    /// Repayment of social-security (IESS) loans.
    SocialSecurityLoans,
    /// Amount deposited with social security on the employee's behalf.
    SocialSecurityDeposit,
}

impl InputField {
    /// Every input field, in statement column order.
    pub const ALL: [InputField; 11] = [
        InputField::DaysWorked,
        InputField::OvertimeHours50,
        InputField::OvertimeHours100,
        InputField::Bonus,
        InputField::PerDiem,
        InputField::EmployeeLoans,
        InputField::SalaryAdvance,
        InputField::IncomeTaxWithholding,
        InputField::OtherDeductions,
        InputField::SocialSecurityLoans,
        InputField::SocialSecurityDeposit,
    ];
}

/// A single-field edit to a payroll line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDelta {
    /// The field being edited.
    pub field: InputField,
    /// The new value of the field.
    pub value: Decimal,
}

/// The values entered for one employee in one period.
///
/// # Example
///
/// ```
/// use rol_pagos_engine::models::{InputField, PayrollLineInput, PeriodDays};
/// use rust_decimal::Decimal;
///
/// let input = PayrollLineInput::seeded(PeriodDays::new(30).unwrap());
/// assert_eq!(input.days_worked, Decimal::from(30));
/// assert_eq!(input.get(InputField::Bonus), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineInput {
    /// Days actually worked.
    pub days_worked: Decimal,
    /// Overtime hours at 50%.
    pub overtime_hours_50: Decimal,
    /// Overtime hours at 100%.
    pub overtime_hours_100: Decimal,
    /// Bonus.
    pub bonus: Decimal,
    /// Per diem.
    pub per_diem: Decimal,
    /// Company loan repayments.
    pub employee_loans: Decimal,
    /// Salary advance.
    pub salary_advance: Decimal,
    /// Income tax withholding.
    pub income_tax_withholding: Decimal,
    /// Other deductions.
    pub other_deductions: Decimal,
    /// Social-security loan repayments.
    pub social_security_loans: Decimal,
    /// Social-security deposit.
    pub social_security_deposit: Decimal,
}

impl PayrollLineInput {
    /// The input a line starts with: full attendance, everything else zero.
    pub fn seeded(days_in_period: PeriodDays) -> Self {
        Self {
            days_worked: days_in_period.as_decimal(),
            overtime_hours_50: Decimal::ZERO,
            overtime_hours_100: Decimal::ZERO,
            bonus: Decimal::ZERO,
            per_diem: Decimal::ZERO,
            employee_loans: Decimal::ZERO,
            salary_advance: Decimal::ZERO,
            income_tax_withholding: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            social_security_loans: Decimal::ZERO,
            social_security_deposit: Decimal::ZERO,
        }
    }

    /// Reads a field by name.
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::DaysWorked => self.days_worked,
            InputField::OvertimeHours50 => self.overtime_hours_50,
            InputField::OvertimeHours100 => self.overtime_hours_100,
            InputField::Bonus => self.bonus,
            InputField::PerDiem => self.per_diem,
            InputField::EmployeeLoans => self.employee_loans,
            InputField::SalaryAdvance => self.salary_advance,
            InputField::IncomeTaxWithholding => self.income_tax_withholding,
            InputField::OtherDeductions => self.other_deductions,
            InputField::SocialSecurityLoans => self.social_security_loans,
            InputField::SocialSecurityDeposit => self.social_security_deposit,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, delta: InputDelta) -> Self {
        let slot = match delta.field {
            InputField::DaysWorked => &mut self.days_worked,
            InputField::OvertimeHours50 => &mut self.overtime_hours_50,
            InputField::OvertimeHours100 => &mut self.overtime_hours_100,
            InputField::Bonus => &mut self.bonus,
            InputField::PerDiem => &mut self.per_diem,
            InputField::EmployeeLoans => &mut self.employee_loans,
            InputField::SalaryAdvance => &mut self.salary_advance,
            InputField::IncomeTaxWithholding => &mut self.income_tax_withholding,
            InputField::OtherDeductions => &mut self.other_deductions,
            InputField::SocialSecurityLoans => &mut self.social_security_loans,
            InputField::SocialSecurityDeposit => &mut self.social_security_deposit,
        };
        *slot = delta.value;
        self
    }
}

/// Every amount derived for a payroll line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayrollAmounts {
    /// Base salary scaled by days worked.
    pub prorated_salary: Decimal,
    /// Pay for overtime at 50%.
    pub overtime_pay_50: Decimal,
    /// Pay for overtime at 100%.
    pub overtime_pay_100: Decimal,
    /// Monthly accrual of the thirteenth-month bonus.
    pub thirteenth_bonus_accrual: Decimal,
    /// Monthly accrual of the fourteenth-month bonus.
    pub fourteenth_bonus_accrual: Decimal,
    /// All earnings including accruals.
    pub total_earned: Decimal,
    /// Employee-side social-security contribution.
    pub personal_contribution: Decimal,
    /// All deductions including the personal contribution.
    pub total_deductions: Decimal,
    /// Earnings less deductions.
    pub subtotal: Decimal,
    /// Monthly reserve-fund accrual, zero unless elected.
    pub reserve_fund_accrual: Decimal,
    /// Amount payable to the employee.
    pub net_pay: Decimal,
}

/// A fully derived payroll line.
///
/// Serializes as a flat object: identity, period days, base salary, the
/// eleven inputs and the eleven derived amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollLine {
    employee_id: String,
    days_in_period: PeriodDays,
    base_salary: Decimal,
    #[serde(flatten)]
    input: PayrollLineInput,
    #[serde(flatten)]
    amounts: PayrollAmounts,
}

impl PayrollLine {
    pub(crate) fn new(
        employee_id: String,
        days_in_period: PeriodDays,
        base_salary: Decimal,
        input: PayrollLineInput,
        amounts: PayrollAmounts,
    ) -> Self {
        Self {
            employee_id,
            days_in_period,
            base_salary,
            input,
            amounts,
        }
    }

    /// The employee this line belongs to.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The period length the line was computed with.
    pub fn days_in_period(&self) -> PeriodDays {
        self.days_in_period
    }

    /// The base salary the line was computed with.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// The entered values.
    pub fn input(&self) -> &PayrollLineInput {
        &self.input
    }

    /// The derived amounts.
    pub fn amounts(&self) -> &PayrollAmounts {
        &self.amounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(n: i64) -> PeriodDays {
        PeriodDays::new(n).unwrap()
    }

    #[test]
    fn test_seeded_input_has_full_attendance() {
        let input = PayrollLineInput::seeded(days(28));

        assert_eq!(input.days_worked, Decimal::from(28));
        for field in InputField::ALL.into_iter().skip(1) {
            assert_eq!(input.get(field), Decimal::ZERO, "{:?} should be zero", field);
        }
    }

    #[test]
    fn test_with_replaces_only_the_named_field() {
        let input = PayrollLineInput::seeded(days(30));

        for (i, field) in InputField::ALL.into_iter().enumerate() {
            let value = Decimal::new(1000 + i as i64, 2);
            let updated = input.with(InputDelta { field, value });

            assert_eq!(updated.get(field), value);
            for other in InputField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(updated.get(other), input.get(other));
            }
        }
    }

    #[test]
    fn test_input_field_serialization() {
        assert_eq!(
            serde_json::to_string(&InputField::OvertimeHours50).unwrap(),
            "\"overtime_hours_50\""
        );
        assert_eq!(
            serde_json::to_string(&InputField::SocialSecurityDeposit).unwrap(),
            "\"social_security_deposit\""
        );
    }

    #[test]
    fn test_deserialize_input_delta() {
        let json = r#"{ "field": "days_worked", "value": "15" }"#;
        let delta: InputDelta = serde_json::from_str(json).unwrap();

        assert_eq!(delta.field, InputField::DaysWorked);
        assert_eq!(delta.value, Decimal::from(15));
    }
}
