//! Property tests for the payroll calculator and the eligibility rule.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use rol_pagos_engine::calculation::{
    RESERVE_FUND_TENURE_DAYS, apply_input, compute_payroll_line, is_reserve_fund_eligible,
};
use rol_pagos_engine::config::StatutoryRates;
use rol_pagos_engine::models::{
    Employee, InputDelta, InputField, PayrollLineInput, PeriodDays,
};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

fn employee(salary_cents: i64, accumulates: bool) -> Employee {
    let mut employee = Employee::new(
        "emp-001",
        Decimal::new(salary_cents, 2),
        NaiveDate::from_ymd_opt(2020, 3, 1),
        reference_date(),
    );
    employee.accumulates_reserve_fund = accumulates;
    employee
}

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..500_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..2_000).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn input_strategy() -> impl Strategy<Value = PayrollLineInput> {
    (
        (0i64..=31, hours(), hours(), money(), money()),
        (money(), money(), money(), money(), money(), money()),
    )
        .prop_map(
            |(
                (days_worked, overtime_hours_50, overtime_hours_100, bonus, per_diem),
                (
                    employee_loans,
                    salary_advance,
                    income_tax_withholding,
                    other_deductions,
                    social_security_loans,
                    social_security_deposit,
                ),
            )| PayrollLineInput {
                days_worked: Decimal::from(days_worked),
                overtime_hours_50,
                overtime_hours_100,
                bonus,
                per_diem,
                employee_loans,
                salary_advance,
                income_tax_withholding,
                other_deductions,
                social_security_loans,
                social_security_deposit,
            },
        )
}

fn period_days() -> impl Strategy<Value = PeriodDays> {
    (1i64..=31).prop_map(|days| PeriodDays::new(days).unwrap())
}

proptest! {
    #[test]
    fn prop_calculation_is_deterministic(
        salary in 0i64..1_000_000,
        accumulates in any::<bool>(),
        input in input_strategy(),
        days in period_days(),
    ) {
        let employee = employee(salary, accumulates);
        let first = compute_payroll_line(&employee, &input, days).unwrap();
        let second = compute_payroll_line(&employee, &input, days).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_net_pay_identity(
        salary in 0i64..1_000_000,
        accumulates in any::<bool>(),
        input in input_strategy(),
        days in period_days(),
    ) {
        let line = compute_payroll_line(&employee(salary, accumulates), &input, days).unwrap();
        let a = line.amounts();

        prop_assert_eq!(a.subtotal, a.total_earned - a.total_deductions);
        prop_assert_eq!(
            a.net_pay,
            a.subtotal + a.reserve_fund_accrual - input.social_security_deposit
        );
    }

    #[test]
    fn prop_reserve_fund_gated_by_election(
        salary in 0i64..1_000_000,
        input in input_strategy(),
        days in period_days(),
    ) {
        let opted_out = compute_payroll_line(&employee(salary, false), &input, days).unwrap();
        let opted_in = compute_payroll_line(&employee(salary, true), &input, days).unwrap();

        prop_assert_eq!(opted_out.amounts().reserve_fund_accrual, Decimal::ZERO);
        prop_assert_eq!(
            opted_in.amounts().reserve_fund_accrual,
            opted_in.amounts().thirteenth_bonus_accrual
        );
        prop_assert_eq!(opted_in.amounts().subtotal, opted_out.amounts().subtotal);
    }

    #[test]
    fn prop_seeded_input_pays_full_salary(
        salary in 0i64..1_000_000,
        days in period_days(),
    ) {
        let employee = employee(salary, false);
        let a = *compute_payroll_line(&employee, &PayrollLineInput::seeded(days), days)
            .unwrap()
            .amounts();
        let expected_fourteenth =
            Decimal::from(470) * Decimal::from(8) * days.as_decimal() / Decimal::from(240)
                / Decimal::from(12);

        prop_assert_eq!(a.prorated_salary, employee.base_salary);
        prop_assert!(a.overtime_pay_50.is_zero());
        prop_assert!(a.overtime_pay_100.is_zero());
        prop_assert_eq!(a.fourteenth_bonus_accrual, expected_fourteenth);
        prop_assert!(a.reserve_fund_accrual.is_zero());
    }

    #[test]
    fn prop_zero_input_yields_zero_amounts(
        salary in 0i64..1_000_000,
        accumulates in any::<bool>(),
        days in period_days(),
    ) {
        let input = PayrollLineInput {
            days_worked: Decimal::ZERO,
            ..PayrollLineInput::seeded(days)
        };
        let a = *compute_payroll_line(&employee(salary, accumulates), &input, days)
            .unwrap()
            .amounts();

        prop_assert!(a.prorated_salary.is_zero());
        prop_assert!(a.fourteenth_bonus_accrual.is_zero());
        prop_assert!(a.total_earned.is_zero());
        prop_assert!(a.total_deductions.is_zero());
        prop_assert!(a.net_pay.is_zero());
    }

    #[test]
    fn prop_overtime_is_linear_in_hours(
        salary in 0i64..1_000_000,
        h in hours(),
    ) {
        let employee = employee(salary, false);
        let days = PeriodDays::default();
        let single = PayrollLineInput { overtime_hours_50: h, ..PayrollLineInput::seeded(days) };
        let double = PayrollLineInput {
            overtime_hours_50: h * Decimal::TWO,
            ..PayrollLineInput::seeded(days)
        };

        let one = compute_payroll_line(&employee, &single, days)
            .unwrap()
            .amounts()
            .overtime_pay_50;
        let two = compute_payroll_line(&employee, &double, days)
            .unwrap()
            .amounts()
            .overtime_pay_50;
        prop_assert!((one * Decimal::TWO - two).abs() < Decimal::new(1, 15));
    }

    #[test]
    fn prop_double_overtime_follows_hourly_rate(
        salary in 0i64..1_000_000,
        h in hours(),
    ) {
        let employee = employee(salary, false);
        let days = PeriodDays::default();
        let single = PayrollLineInput { overtime_hours_100: h, ..PayrollLineInput::seeded(days) };
        let double = PayrollLineInput {
            overtime_hours_100: h * Decimal::TWO,
            ..PayrollLineInput::seeded(days)
        };

        let one = compute_payroll_line(&employee, &single, days)
            .unwrap()
            .amounts()
            .overtime_pay_100;
        let two = compute_payroll_line(&employee, &double, days)
            .unwrap()
            .amounts()
            .overtime_pay_100;
        let slope = employee.base_salary / Decimal::from(240) * Decimal::TWO;

        prop_assert!((one * Decimal::TWO - two).abs() < Decimal::new(1, 15));
        prop_assert!((one - slope * h).abs() < Decimal::new(1, 15));
    }

    #[test]
    fn prop_apply_input_matches_full_recompute(
        salary in 0i64..1_000_000,
        input in input_strategy(),
        field_index in 0usize..InputField::ALL.len(),
        value in money(),
    ) {
        let employee = employee(salary, true);
        let days = PeriodDays::default();
        let rates = StatutoryRates::default();
        let line = compute_payroll_line(&employee, &input, days).unwrap();
        let delta = InputDelta { field: InputField::ALL[field_index], value };

        let updated = apply_input(&line, &employee, delta, &rates).unwrap();
        let expected = compute_payroll_line(&employee, &input.with(delta), days).unwrap();
        prop_assert_eq!(updated, expected);
    }

    #[test]
    fn prop_eligibility_threshold(offset in 0u64..2_000) {
        let reference = reference_date();
        let hired = reference.checked_sub_days(Days::new(offset)).unwrap();

        prop_assert_eq!(
            is_reserve_fund_eligible(Some(hired), reference),
            offset as i64 >= RESERVE_FUND_TENURE_DAYS
        );
    }

    #[test]
    fn prop_future_hire_never_eligible(offset in 1u64..2_000) {
        let reference = reference_date();
        let hired = reference.checked_add_days(Days::new(offset)).unwrap();

        prop_assert!(!is_reserve_fund_eligible(Some(hired), reference));
    }
}
