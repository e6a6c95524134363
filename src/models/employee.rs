//! Employee model and related types.
//!
//! An [`Employee`] is a read-only snapshot supplied by the employee directory.
//! The reserve-fund eligibility it carries is derived from the hire date at a
//! specific evaluation date and can only change through [`Employee::with_hire_date`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::evaluate_reserve_fund_eligibility;
use crate::config::StatutoryRates;

/// Accounting classification of an employee's pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostAssignment {
    /// Booked as a production cost.
    Cost,
    /// Booked as an operating expense.
    Expense,
}

/// Point-in-time result of the reserve-fund tenure rule.
///
/// The flag is not refreshed as time passes; it reflects tenure as of
/// `evaluated_on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveFundEligibility {
    /// Whether the employee had at least one year of tenure on `evaluated_on`.
    pub eligible: bool,
    /// The reference date the rule was evaluated against.
    pub evaluated_on: NaiveDate,
}

/// Represents an employee as seen by the payroll engine.
///
/// Deserialization re-derives reserve-fund eligibility from `hire_date` as of
/// the supplied `reserve_fund.evaluated_on`; a supplied `eligible` flag is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmployeeRecord")]
pub struct Employee {
    id: String,
    /// Family names ("apellidos").
    pub last_names: String,
    /// Given names ("nombres").
    pub first_names: String,
    /// National identity document number ("cédula").
    pub national_id: String,
    /// Job title ("cargo").
    pub job_title: String,
    /// Cost or expense classification, if assigned.
    pub cost_assignment: Option<CostAssignment>,
    /// Monthly nominal salary.
    pub base_salary: Decimal,
    hire_date: Option<NaiveDate>,
    /// Date the employee left, if any.
    pub termination_date: Option<NaiveDate>,
    /// Only active employees appear on a payroll.
    pub active: bool,
    reserve_fund: ReserveFundEligibility,
    /// Election to receive the reserve fund monthly with each payroll.
    pub accumulates_reserve_fund: bool,
    /// Election to receive the décimo bonuses monthly. Recorded only.
    pub monthly_decimos: bool,
}

/// Serialized shape of an [`Employee`].
#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    id: String,
    #[serde(default)]
    last_names: String,
    #[serde(default)]
    first_names: String,
    #[serde(default)]
    national_id: String,
    #[serde(default)]
    job_title: String,
    #[serde(default)]
    cost_assignment: Option<CostAssignment>,
    base_salary: Decimal,
    hire_date: Option<NaiveDate>,
    #[serde(default)]
    termination_date: Option<NaiveDate>,
    active: bool,
    reserve_fund: EvaluationDate,
    #[serde(default)]
    accumulates_reserve_fund: bool,
    #[serde(default)]
    monthly_decimos: bool,
}

/// Only the evaluation date of a serialized eligibility snapshot is trusted.
#[derive(Debug, Deserialize)]
struct EvaluationDate {
    evaluated_on: NaiveDate,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            last_names: record.last_names,
            first_names: record.first_names,
            national_id: record.national_id,
            job_title: record.job_title,
            cost_assignment: record.cost_assignment,
            termination_date: record.termination_date,
            active: record.active,
            accumulates_reserve_fund: record.accumulates_reserve_fund,
            monthly_decimos: record.monthly_decimos,
            ..Self::new(
                record.id,
                record.base_salary,
                record.hire_date,
                record.reserve_fund.evaluated_on,
            )
        }
    }
}

impl Employee {
    /// Creates an active employee, evaluating reserve-fund eligibility as of
    /// `evaluated_on`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rol_pagos_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let employee = Employee::new(
    ///     "emp-001",
    ///     Decimal::new(800, 0),
    ///     NaiveDate::from_ymd_opt(2023, 3, 15),
    ///     today,
    /// );
    ///
    /// assert!(employee.is_reserve_fund_eligible());
    /// assert_eq!(employee.reserve_fund_eligibility().evaluated_on, today);
    /// ```
    pub fn new(
        id: impl Into<String>,
        base_salary: Decimal,
        hire_date: Option<NaiveDate>,
        evaluated_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            last_names: String::new(),
            first_names: String::new(),
            national_id: String::new(),
            job_title: String::new(),
            cost_assignment: None,
            base_salary,
            hire_date,
            termination_date: None,
            active: true,
            reserve_fund: evaluate_reserve_fund_eligibility(hire_date, evaluated_on),
            accumulates_reserve_fund: false,
            monthly_decimos: false,
        }
    }

    /// Creates the default record for someone hired today: paid the statutory
    /// reference wage, no elections made.
    pub fn new_hire(id: impl Into<String>, today: NaiveDate, rates: &StatutoryRates) -> Self {
        Self::new(id, rates.reference_wage, Some(today), today)
    }

    /// Returns a copy with a new hire date, re-evaluating eligibility as of
    /// `evaluated_on`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rol_pagos_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let employee = Employee::new("emp-001", Decimal::new(470, 0), Some(today), today);
    /// assert!(!employee.is_reserve_fund_eligible());
    ///
    /// let corrected = employee.with_hire_date(NaiveDate::from_ymd_opt(2020, 1, 6), today);
    /// assert!(corrected.is_reserve_fund_eligible());
    /// ```
    pub fn with_hire_date(mut self, hire_date: Option<NaiveDate>, evaluated_on: NaiveDate) -> Self {
        self.hire_date = hire_date;
        self.reserve_fund = evaluate_reserve_fund_eligibility(hire_date, evaluated_on);
        self
    }

    /// Returns a copy with the active flag set.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The stable identity of the employee.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The hire date, if recorded.
    pub fn hire_date(&self) -> Option<NaiveDate> {
        self.hire_date
    }

    /// The stored eligibility snapshot.
    pub fn reserve_fund_eligibility(&self) -> ReserveFundEligibility {
        self.reserve_fund
    }

    /// Shorthand for `reserve_fund_eligibility().eligible`.
    pub fn is_reserve_fund_eligible(&self) -> bool {
        self.reserve_fund.eligible
    }

    /// Last names followed by first names, skipping blank parts.
    ///
    /// ```
    /// use rol_pagos_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let mut employee = Employee::new("emp-001", Decimal::new(470, 0), None, today);
    /// employee.last_names = " Pérez Mora ".to_string();
    /// employee.first_names = "Ana".to_string();
    /// assert_eq!(employee.full_name(), "Pérez Mora Ana");
    /// ```
    pub fn full_name(&self) -> String {
        [self.last_names.trim(), self.first_names.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
