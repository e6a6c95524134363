//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite covers:
//! - A single payroll line computed directly
//! - A payroll run over 1000 employees, and its statement
//! - A statement request through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use rol_pagos_engine::api::{AppState, create_router};
use rol_pagos_engine::calculation::{PayrollRun, compute_payroll_line};
use rol_pagos_engine::config::{ConfigLoader, StatutoryRates};
use rol_pagos_engine::models::{Employee, PayrollLineInput, PeriodConfig, PeriodDays, Roster};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

/// Creates a roster of `count` employees with varied salaries and elections.
fn create_roster(count: usize) -> Roster {
    let employees = (0..count)
        .map(|i| {
            let mut employee = Employee::new(
                format!("emp_{:04}", i),
                Decimal::new(47_000 + (i as i64 % 50) * 1_000, 2),
                NaiveDate::from_ymd_opt(2015 + (i as i32 % 10), 1 + (i as u32 % 12), 1),
                today(),
            );
            employee.accumulates_reserve_fund = i % 2 == 0;
            employee
        })
        .collect();
    Roster::new(employees).expect("Failed to create roster")
}

fn create_period() -> PeriodConfig {
    PeriodConfig::for_cutoff("Comercial Andina S.A.", today())
}

/// Benchmark: one payroll line.
fn bench_single_line(c: &mut Criterion) {
    let employee = Employee::new(
        "emp_bench_001",
        Decimal::from(600),
        NaiveDate::from_ymd_opt(2020, 1, 1),
        today(),
    );
    let days = PeriodDays::default();
    let input = PayrollLineInput {
        overtime_hours_50: Decimal::from(10),
        overtime_hours_100: Decimal::from(4),
        bonus: Decimal::from(50),
        salary_advance: Decimal::from(100),
        ..PayrollLineInput::seeded(days)
    };

    c.bench_function("single_line", |b| {
        b.iter(|| {
            black_box(
                compute_payroll_line(black_box(&employee), &input, days)
                    .expect("Failed to compute line"),
            )
        })
    });
}

/// Benchmark: payroll runs and statements over growing rosters.
fn bench_payroll_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_run");

    for size in [10usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("start", size), &roster, |b, roster| {
            b.iter(|| {
                PayrollRun::start(create_period(), black_box(roster), StatutoryRates::default())
                    .expect("Failed to start run")
            })
        });

        let run = PayrollRun::start(create_period(), &roster, StatutoryRates::default())
            .expect("Failed to start run");
        group.bench_with_input(BenchmarkId::new("statement", size), &roster, |b, roster| {
            b.iter(|| run.statement(black_box(roster)).expect("Failed to build statement"))
        });
    }

    group.finish();
}

/// Benchmark: a statement request through the router.
fn bench_statement_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let employees: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "id": format!("emp_{:03}", i),
                "last_names": "Bench",
                "first_names": format!("Employee {}", i),
                "base_salary": "650.00",
                "hire_date": "2019-05-01",
                "accumulates_reserve_fund": i % 2 == 0
            })
        })
        .collect();
    let inputs: HashMap<String, serde_json::Value> = (0..100)
        .step_by(5)
        .map(|i| (format!("emp_{:03}", i), serde_json::json!({ "overtime_hours_50": "6" })))
        .collect();
    let body = serde_json::json!({ "employees": employees, "inputs": inputs }).to_string();

    c.bench_function("statement_request_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/statement")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_line,
    bench_payroll_run,
    bench_statement_request
);
criterion_main!(benches);
