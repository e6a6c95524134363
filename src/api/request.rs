//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the API endpoints.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CostAssignment, Employee, InputDelta, PayrollLineInput, PeriodConfig, PeriodDays,
};

/// Request body for the `/eligibility` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    /// The hire date, if known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The date to evaluate against. Defaults to today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Request body for the `/payroll-line` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollLineRequest {
    /// The employee the line is for.
    pub employee: EmployeeRequest,
    /// Entered values. Omitted fields take their seeded defaults.
    #[serde(default)]
    pub input: PayrollLineInputRequest,
    /// Days in the period. Defaults to the configured period.
    #[serde(default)]
    pub days_in_period: Option<i64>,
}

/// Request body for the `/payroll-line/apply` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyInputRequest {
    /// The employee the line is for.
    pub employee: EmployeeRequest,
    /// The values currently entered on the line.
    #[serde(default)]
    pub input: PayrollLineInputRequest,
    /// Days in the period. Defaults to the configured period.
    #[serde(default)]
    pub days_in_period: Option<i64>,
    /// The edit to apply.
    pub delta: InputDelta,
}

/// Request body for the `/statement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The period. Defaults to the configured period.
    #[serde(default)]
    pub period: Option<PeriodConfig>,
    /// The employee directory snapshot, in display order.
    pub employees: Vec<EmployeeRequest>,
    /// Entered values keyed by employee id. Employees without an entry get
    /// seeded inputs.
    #[serde(default)]
    pub inputs: HashMap<String, PayrollLineInputRequest>,
}

/// Employee information in a request.
///
/// Reserve-fund eligibility is not accepted from the caller; it is derived
/// from `hire_date` as of `eligibility_evaluated_on`.
///
/// Eligibility is a snapshot taken when the hire date is set. Callers must
/// store the `evaluated_on` date returned by `/eligibility` (or the date they
/// first evaluated it) and resend it as `eligibility_evaluated_on` on every
/// request. When it is omitted the rule is evaluated as of the request date,
/// so an employee crosses the one-year threshold as soon as a year has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Family names.
    #[serde(default)]
    pub last_names: String,
    /// Given names.
    #[serde(default)]
    pub first_names: String,
    /// National identity document number.
    #[serde(default)]
    pub national_id: String,
    /// Job title.
    #[serde(default)]
    pub job_title: String,
    /// Cost or expense classification.
    #[serde(default)]
    pub cost_assignment: Option<CostAssignment>,
    /// Monthly nominal salary.
    pub base_salary: Decimal,
    /// Hire date.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Termination date.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Whether the employee is on the payroll.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Monthly reserve-fund accrual election.
    #[serde(default)]
    pub accumulates_reserve_fund: bool,
    /// Monthly décimos election.
    #[serde(default)]
    pub monthly_decimos: bool,
    /// Date the hire date was last set, used to evaluate eligibility.
    /// Omitting it evaluates eligibility as of the request date.
    #[serde(default)]
    pub eligibility_evaluated_on: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl EmployeeRequest {
    /// Converts to an [`Employee`], evaluating eligibility as of
    /// `eligibility_evaluated_on`, or `today` when absent.
    ///
    /// Passing the stored evaluation date keeps the snapshot stable across
    /// requests; falling back to `today` re-evaluates it on every call.
    pub fn into_employee(self, today: NaiveDate) -> Employee {
        let evaluated_on = self.eligibility_evaluated_on.unwrap_or(today);
        let mut employee = Employee::new(self.id, self.base_salary, self.hire_date, evaluated_on)
            .with_active(self.active);
        employee.last_names = self.last_names;
        employee.first_names = self.first_names;
        employee.national_id = self.national_id;
        employee.job_title = self.job_title;
        employee.cost_assignment = self.cost_assignment;
        employee.termination_date = self.termination_date;
        employee.accumulates_reserve_fund = self.accumulates_reserve_fund;
        employee.monthly_decimos = self.monthly_decimos;
        employee
    }
}

/// Entered values in a request. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollLineInputRequest {
    /// Days worked. Defaults to the days in the period.
    pub days_worked: Option<Decimal>,
    /// Overtime hours at 50%.
    pub overtime_hours_50: Option<Decimal>,
    /// Overtime hours at 100%.
    pub overtime_hours_100: Option<Decimal>,
    /// Bonus.
    pub bonus: Option<Decimal>,
    /// Per diem.
    pub per_diem: Option<Decimal>,
    /// Company loan repayments.
    pub employee_loans: Option<Decimal>,
    /// Salary advance.
    pub salary_advance: Option<Decimal>,
    /// Income tax withholding.
    pub income_tax_withholding: Option<Decimal>,
    /// Other deductions.
    pub other_deductions: Option<Decimal>,
    /// Social-security loan repayments.
    pub social_security_loans: Option<Decimal>,
    /// Social-security deposit.
    pub social_security_deposit: Option<Decimal>,
}

impl PayrollLineInputRequest {
    /// Fills omitted fields from the seeded input for `days_in_period`.
    pub fn into_input(self, days_in_period: PeriodDays) -> PayrollLineInput {
        let seeded = PayrollLineInput::seeded(days_in_period);
        PayrollLineInput {
            days_worked: self.days_worked.unwrap_or(seeded.days_worked),
            overtime_hours_50: self.overtime_hours_50.unwrap_or(seeded.overtime_hours_50),
            overtime_hours_100: self.overtime_hours_100.unwrap_or(seeded.overtime_hours_100),
            bonus: self.bonus.unwrap_or(seeded.bonus),
            per_diem: self.per_diem.unwrap_or(seeded.per_diem),
            employee_loans: self.employee_loans.unwrap_or(seeded.employee_loans),
            salary_advance: self.salary_advance.unwrap_or(seeded.salary_advance),
            income_tax_withholding: self
                .income_tax_withholding
                .unwrap_or(seeded.income_tax_withholding),
            other_deductions: self.other_deductions.unwrap_or(seeded.other_deductions),
            social_security_loans: self
                .social_security_loans
                .unwrap_or(seeded.social_security_loans),
            social_security_deposit: self
                .social_security_deposit
                .unwrap_or(seeded.social_security_deposit),
        }
    }
}
