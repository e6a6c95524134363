//! Reserve-fund eligibility.
//!
//! An employee becomes entitled to the reserve fund ("fondo de reserva") after
//! one year of service. Tenure is counted in calendar days between the hire
//! date and the date of evaluation.

use chrono::NaiveDate;

use crate::models::ReserveFundEligibility;

/// Days of tenure required before reserve-fund accrual is allowed.
pub const RESERVE_FUND_TENURE_DAYS: i64 = 365;

/// Returns true if at least [`RESERVE_FUND_TENURE_DAYS`] calendar days have
/// elapsed between `hire_date` and `reference_date`.
///
/// An unset hire date is never eligible, nor is a hire date after the
/// reference date.
///
/// # Examples
///
/// ```
/// use rol_pagos_engine::calculation::is_reserve_fund_eligible;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// assert!(is_reserve_fund_eligible(NaiveDate::from_ymd_opt(2024, 6, 1), today));
/// assert!(!is_reserve_fund_eligible(NaiveDate::from_ymd_opt(2024, 6, 2), today));
/// assert!(!is_reserve_fund_eligible(None, today));
/// ```
pub fn is_reserve_fund_eligible(hire_date: Option<NaiveDate>, reference_date: NaiveDate) -> bool {
    hire_date.is_some_and(|hired| {
        reference_date.signed_duration_since(hired).num_days() >= RESERVE_FUND_TENURE_DAYS
    })
}

/// Evaluates eligibility and records the date it was evaluated on.
///
/// The snapshot is not refreshed as time passes; callers re-evaluate when the
/// hire date changes.
pub fn evaluate_reserve_fund_eligibility(
    hire_date: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> ReserveFundEligibility {
    ReserveFundEligibility {
        eligible: is_reserve_fund_eligible(hire_date, reference_date),
        evaluated_on: reference_date,
    }
}
