//! Payroll engine for Ecuadorian monthly payroll (rol de pagos).
//!
//! This crate evaluates reserve-fund eligibility from an employee's tenure,
//! computes payroll lines (prorated salary, overtime, thirteenth and
//! fourteenth salaries, social-security contribution, deductions and net
//! pay) and assembles them into period statements.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
