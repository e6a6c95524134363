//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll_line;
mod period;
mod roster;
mod statement;

pub use employee::{CostAssignment, Employee, ReserveFundEligibility};
pub use payroll_line::{InputDelta, InputField, PayrollAmounts, PayrollLine, PayrollLineInput};
pub use period::{DEFAULT_DAYS_IN_PERIOD, MONTH_LABELS, PeriodConfig, PeriodDays};
pub use roster::Roster;
pub use statement::{PayrollStatement, StatementEntry, StatementTotals};
