//! Calculation logic for the payroll engine.
//!
//! This module contains the reserve-fund eligibility rule, the payroll line
//! calculator, single-field line edits, and payroll runs that keep one line
//! per active employee in step with the roster and period.

mod eligibility;
mod line_update;
mod payroll_line;
mod payroll_run;

pub use eligibility::{
    RESERVE_FUND_TENURE_DAYS, evaluate_reserve_fund_eligibility, is_reserve_fund_eligible,
};
pub use line_update::apply_input;
pub use payroll_line::{compute_payroll_line, compute_payroll_line_with_rates};
pub use payroll_run::PayrollRun;
