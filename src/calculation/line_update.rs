//! Single-field edits to a payroll line.

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, InputDelta, PayrollLine};

use super::compute_payroll_line_with_rates;

/// Returns a new line with one input replaced and every amount recomputed.
///
/// The line is recomputed against the given employee snapshot, so a salary
/// change made since the line was built is picked up too.
///
/// # Errors
///
/// Returns [`EngineError::UnknownEmployee`] if `employee` is not the
/// employee the line belongs to, or [`EngineError::AmountOverflow`] if the
/// recomputed amounts exceed the range of decimal arithmetic.
///
/// # Examples
///
/// ```
/// use rol_pagos_engine::calculation::{apply_input, compute_payroll_line};
/// use rol_pagos_engine::config::StatutoryRates;
/// use rol_pagos_engine::models::{Employee, InputDelta, InputField, PayrollLineInput, PeriodDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let employee = Employee::new("emp-001", Decimal::from(600), Some(today), today);
/// let days = PeriodDays::new(30).unwrap();
/// let line = compute_payroll_line(&employee, &PayrollLineInput::seeded(days), days)?;
///
/// let delta = InputDelta { field: InputField::DaysWorked, value: Decimal::from(20) };
/// let updated = apply_input(&line, &employee, delta, &StatutoryRates::default())?;
///
/// assert_eq!(updated.amounts().prorated_salary, Decimal::from(400));
/// assert_eq!(line.amounts().prorated_salary, Decimal::from(600));
/// # Ok::<(), rol_pagos_engine::error::EngineError>(())
/// ```
pub fn apply_input(
    line: &PayrollLine,
    employee: &Employee,
    delta: InputDelta,
    rates: &StatutoryRates,
) -> EngineResult<PayrollLine> {
    if employee.id() != line.employee_id() {
        return Err(EngineError::UnknownEmployee {
            employee_id: line.employee_id().to_string(),
        });
    }

    let input = line.input().with(delta);
    compute_payroll_line_with_rates(employee, &input, line.days_in_period(), rates)
}
