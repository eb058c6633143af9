//! Integration tests for the payroll engine.
//!
//! This suite covers the end-to-end calculation scenarios:
//! - A full workday with the standard deduction cascade
//! - Monthly overtime past the standard hours threshold
//! - Overnight shifts inside the 22:00-05:00 night window
//! - Sunday and company-holiday premiums and their priority
//! - Apartment rent and leave-day deductions under both leave policies
//! - Yukyu ledger grant / LIFO use / expiry / adjustment flows
//! - The HTTP surface, including error status codes
//! - Property tests for the hour partition and the conservation law

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{CalculationInputs, PayrollCalculator};
use payroll_engine::config::{ConfigLoader, LeavePolicy, RateConfiguration, RateSet};
use payroll_engine::error::EngineError;
use payroll_engine::ledger::YukyuLedger;
use payroll_engine::models::{CompanyHoliday, EmployeeSnapshot, PayPeriod, TimeRecord};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn standard_configuration(leave_policy: LeavePolicy) -> RateConfiguration {
    RateConfiguration {
        overtime_rate: dec("1.25"),
        night_rate: dec("1.25"),
        holiday_rate: dec("1.35"),
        sunday_rate: dec("1.35"),
        standard_hours_per_month: dec("160"),
        standard_daily_hours: dec("8"),
        income_tax_rate: dec("5.0"),
        resident_tax_rate: dec("4.0"),
        health_insurance_rate: dec("5.0"),
        pension_rate: dec("9.15"),
        employment_insurance_rate: dec("0.6"),
        leave_policy,
    }
}

fn standard_calculator() -> PayrollCalculator {
    PayrollCalculator::new(standard_configuration(LeavePolicy::UnpaidDeducted))
}

fn make_employee(id: &str, rate: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: id.to_string(),
        name: "Tanaka Hanako".to_string(),
        base_hourly_rate: dec(rate),
        apartment_rent: None,
        hire_date: date("2023-04-01"),
        dependents: 0,
    }
}

fn make_record(day: &str, clock_in: (u32, u32), clock_out: (u32, u32), break_minutes: u32) -> TimeRecord {
    TimeRecord {
        work_date: date(day),
        clock_in: NaiveTime::from_hms_opt(clock_in.0, clock_in.1, 0).unwrap(),
        clock_out: NaiveTime::from_hms_opt(clock_out.0, clock_out.1, 0).unwrap(),
        break_minutes,
        is_approved: true,
    }
}

fn october_period() -> PayPeriod {
    PayPeriod {
        start_date: date("2025-10-01"),
        end_date: date("2025-10-31"),
        holidays: vec![],
    }
}

fn create_test_state() -> AppState {
    let loader = ConfigLoader::from_rate_sets(
        "acme_staffing",
        vec![RateSet {
            effective_date: date("2025-04-01"),
            configuration: standard_configuration(LeavePolicy::UnpaidDeducted),
        }],
    )
    .unwrap();
    AppState::new(loader)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = Decimal::from_str(value.as_str().unwrap()).unwrap();
    assert_eq!(actual, dec(expected), "expected {expected}, got {actual}");
}

// =============================================================================
// Calculation Scenarios
// =============================================================================

/// A single 9:00-18:00 workday with a one-hour break: 7 regular hours,
/// gross 10500 yen, every percentage deduction taken independently.
#[test]
fn test_single_workday_full_cascade() {
    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");
    let records = vec![make_record("2025-10-01", (9, 0), (18, 0), 60)];

    let result = calculator
        .calculate(&employee, &records, &october_period(), &CalculationInputs::default())
        .unwrap();

    assert_eq!(result.hours.regular, dec("7"));
    assert_eq!(result.hours.total, dec("7"));
    assert_eq!(result.amounts.gross, dec("10500"));
    assert_eq!(result.deductions.income_tax, dec("525"));
    assert_eq!(result.deductions.resident_tax, dec("420"));
    assert_eq!(result.deductions.health_insurance, dec("525"));
    assert_eq!(result.deductions.pension, dec("961"));
    assert_eq!(result.deductions.employment_insurance, dec("63"));
    assert_eq!(result.amounts.total_deductions, dec("2494"));
    assert_eq!(result.amounts.net, dec("8006"));
    assert!(result.validation.is_valid());
}

/// A 22-workday month of 8-hour days crosses the 160-hour threshold:
/// 160 regular hours plus 16 overtime hours at 1.25.
#[test]
fn test_monthly_overtime_threshold() {
    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");

    // 22 non-Sunday 8-hour days: 176 base hours against the 160 threshold.
    let mut records = Vec::new();
    let mut day = date("2025-10-01");
    while records.len() < 22 {
        if day.weekday() != chrono::Weekday::Sun {
            records.push(TimeRecord {
                work_date: day,
                clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                clock_out: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                break_minutes: 60,
                is_approved: true,
            });
        }
        day = day.succ_opt().unwrap();
    }

    let result = calculator
        .calculate(&employee, &records, &october_period(), &CalculationInputs::default())
        .unwrap();

    assert_eq!(result.hours.regular, dec("160"));
    assert_eq!(result.hours.overtime, dec("16"));
    assert_eq!(result.amounts.base, dec("240000"));
    // 16h * 1500 * 1.25
    assert_eq!(result.amounts.overtime, dec("30000"));
    assert_eq!(result.amounts.gross, dec("270000"));
    assert_eq!(result.amounts.net, dec("205875"));
}

/// An overnight 22:00-05:00 shift lands entirely in the night window.
#[test]
fn test_overnight_shift_night_premium() {
    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");
    let records = vec![make_record("2025-10-01", (22, 0), (5, 0), 60)];

    let result = calculator
        .calculate(&employee, &records, &october_period(), &CalculationInputs::default())
        .unwrap();

    assert_eq!(result.hours.night, dec("6"));
    assert_eq!(result.hours.regular, dec("0"));
    // 6h * 1500 * 1.25
    assert_eq!(result.amounts.night, dec("11250"));
    assert_eq!(result.amounts.gross, dec("11250"));
}

/// Sunday work earns the Sunday premium; a company holiday on a Sunday
/// takes the holiday premium instead.
#[test]
fn test_sunday_and_holiday_priority() {
    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");

    // 2025-10-05 is a Sunday.
    let sunday_records = vec![make_record("2025-10-05", (9, 0), (17, 0), 60)];
    let result = calculator
        .calculate(&employee, &sunday_records, &october_period(), &CalculationInputs::default())
        .unwrap();
    assert_eq!(result.hours.sunday, dec("7"));
    // 7h * 1500 * 1.35
    assert_eq!(result.amounts.sunday, dec("14175"));

    let holiday_period = PayPeriod {
        holidays: vec![CompanyHoliday {
            date: date("2025-10-05"),
            name: "Company Foundation Day".to_string(),
        }],
        ..october_period()
    };
    let result = calculator
        .calculate(&employee, &sunday_records, &holiday_period, &CalculationInputs::default())
        .unwrap();
    assert_eq!(result.hours.sunday, dec("0"));
    assert_eq!(result.hours.holiday, dec("7"));
    assert_eq!(result.amounts.holiday, dec("14175"));
}

/// Under the unpaid-deducted policy, approved leave days and apartment
/// rent come out of net pay as fixed deduction lines.
#[test]
fn test_unpaid_leave_and_rent_deductions() {
    let calculator = standard_calculator();
    let mut employee = make_employee("emp_001", "1500");
    employee.apartment_rent = Some(dec("45000"));

    // 20 non-Sunday 7-hour days: 140 regular hours, gross 210000.
    let mut records = Vec::new();
    let mut day = date("2025-10-01");
    while records.len() < 20 {
        if day.weekday() != chrono::Weekday::Sun {
            records.push(make_record(
                &day.format("%Y-%m-%d").to_string(),
                (9, 0),
                (17, 0),
                60,
            ));
        }
        day = day.succ_opt().unwrap();
    }

    let inputs = CalculationInputs {
        yukyu_days_approved: dec("2"),
        ..CalculationInputs::default()
    };
    let result = calculator
        .calculate(&employee, &records, &october_period(), &inputs)
        .unwrap();

    // 140 worked hours, gross 210000
    assert_eq!(result.amounts.gross, dec("210000"));
    assert_eq!(result.deductions.apartment, dec("45000"));
    // 2 days * 8h * 1500
    assert_eq!(result.deductions.yukyu_deduction, dec("24000"));
    assert_eq!(
        result.amounts.net,
        result.amounts.gross - result.amounts.total_deductions
    );
    assert!(result.validation.is_valid());
}

/// Under the paid policy, leave days credit gross instead of deducting.
#[test]
fn test_paid_leave_credits_gross() {
    let calculator = PayrollCalculator::new(standard_configuration(LeavePolicy::Paid));
    let employee = make_employee("emp_001", "1500");
    let records = vec![make_record("2025-10-01", (9, 0), (18, 0), 60)];
    let inputs = CalculationInputs {
        yukyu_days_approved: dec("1"),
        ..CalculationInputs::default()
    };

    let result = calculator
        .calculate(&employee, &records, &october_period(), &inputs)
        .unwrap();

    // 10500 worked plus one paid leave day worth 12000, itemized as a credit
    assert_eq!(result.amounts.gross, dec("22500"));
    assert_eq!(result.amounts.yukyu_credit, dec("12000"));
    assert_eq!(result.deductions.yukyu_deduction, dec("0"));
    assert_eq!(
        result.amounts.gross,
        result.amounts.base + result.amounts.yukyu_credit
    );
    assert_eq!(
        result.amounts.net,
        result.amounts.gross - result.amounts.total_deductions
    );
}

/// An inconsistent record is rejected into the validation report while
/// the rest of the period still pays out.
#[test]
fn test_invalid_record_does_not_abort_period() {
    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");
    let records = vec![
        make_record("2025-10-01", (9, 0), (10, 0), 120),
        make_record("2025-10-02", (9, 0), (18, 0), 60),
    ];

    let result = calculator
        .calculate(&employee, &records, &october_period(), &CalculationInputs::default())
        .unwrap();

    assert_eq!(result.validation.errors.len(), 1);
    assert_eq!(result.hours.work_days, 1);
    assert_eq!(result.amounts.gross, dec("10500"));
}

/// Rent larger than gross drives net negative; the engine pays out the
/// negative figure and warns instead of clamping.
#[test]
fn test_negative_net_surfaces_warning() {
    let calculator = standard_calculator();
    let mut employee = make_employee("emp_001", "1500");
    employee.apartment_rent = Some(dec("45000"));
    let records = vec![make_record("2025-10-01", (9, 0), (18, 0), 60)];

    let result = calculator
        .calculate(&employee, &records, &october_period(), &CalculationInputs::default())
        .unwrap();

    assert!(result.amounts.net < Decimal::ZERO);
    assert_eq!(result.validation.warnings.len(), 1);
    assert!(result.validation.warnings[0].contains("Negative net pay"));
}

/// Rate configuration resolution picks the latest effective set on or
/// before the period start.
#[test]
fn test_effective_dated_rate_sets() {
    let loader = ConfigLoader::from_rate_sets(
        "acme_staffing",
        vec![
            RateSet {
                effective_date: date("2025-04-01"),
                configuration: standard_configuration(LeavePolicy::UnpaidDeducted),
            },
            RateSet {
                effective_date: date("2025-10-01"),
                configuration: RateConfiguration {
                    overtime_rate: dec("1.5"),
                    ..standard_configuration(LeavePolicy::UnpaidDeducted)
                },
            },
        ],
    )
    .unwrap();

    let september = loader
        .rate_configuration("acme_staffing", date("2025-09-30"))
        .unwrap();
    assert_eq!(september.overtime_rate, dec("1.25"));

    let october = loader
        .rate_configuration("acme_staffing", date("2025-10-01"))
        .unwrap();
    assert_eq!(october.overtime_rate, dec("1.5"));

    let err = loader
        .rate_configuration("acme_staffing", date("2025-03-31"))
        .unwrap_err();
    assert!(matches!(err, EngineError::ConfigurationMissing { .. }));
}

// =============================================================================
// Yukyu Ledger Scenarios
// =============================================================================

/// Two fiscal-year grants consumed LIFO: a 12-day use exhausts the newer
/// grant first, then draws 4 days from the older one.
#[test]
fn test_ledger_lifo_across_fiscal_years() {
    let ledger = YukyuLedger::new();
    ledger
        .grant("emp_001", 2024, dec("10"), date("2024-04-01"), "annual")
        .unwrap();
    ledger
        .grant("emp_001", 2025, dec("8"), date("2025-04-01"), "annual")
        .unwrap();

    let transactions = ledger
        .use_days("emp_001", dec("12"), date("2025-06-01"), "long leave")
        .unwrap();
    assert_eq!(transactions.len(), 2);

    let balances = ledger.balances("emp_001");
    let fy2024 = balances.iter().find(|b| b.fiscal_year == 2024).unwrap();
    let fy2025 = balances.iter().find(|b| b.fiscal_year == 2025).unwrap();
    assert_eq!(fy2025.remaining_days, dec("0"));
    assert_eq!(fy2024.remaining_days, dec("6"));
    assert!(fy2024.conservation_holds());
    assert!(fy2025.conservation_holds());
}

/// Requesting more days than remain fails atomically.
#[test]
fn test_ledger_insufficient_balance_is_atomic() {
    let ledger = YukyuLedger::new();
    ledger
        .grant("emp_001", 2025, dec("3"), date("2025-04-01"), "annual")
        .unwrap();

    let err = ledger
        .use_days("emp_001", dec("5"), date("2025-06-01"), "too long")
        .unwrap_err();
    assert!(matches!(err, EngineError::InsufficientBalance { .. }));

    assert_eq!(ledger.total_remaining("emp_001"), dec("3"));
    // Only the grant transaction exists.
    assert_eq!(ledger.transactions("emp_001").len(), 1);
}

/// A balance granted 2024-04-01 expires when swept on 2026-04-02, and a
/// second sweep is a no-op.
#[test]
fn test_ledger_expiry_and_idempotence() {
    let ledger = YukyuLedger::new();
    ledger
        .grant("emp_001", 2024, dec("10"), date("2024-04-01"), "annual")
        .unwrap();
    ledger
        .use_days("emp_001", dec("4"), date("2025-06-01"), "leave")
        .unwrap();

    assert_eq!(ledger.expire(date("2026-04-02")), 1);
    let balance = &ledger.balances("emp_001")[0];
    assert_eq!(balance.expired_days, dec("6"));
    assert_eq!(balance.remaining_days, dec("0"));
    assert!(balance.conservation_holds());

    assert_eq!(ledger.expire(date("2026-04-02")), 0);
    assert_eq!(ledger.total_remaining("emp_001"), dec("0"));
}

/// The ledger's remaining days feed the calculator as approved leave: a
/// use recorded in the ledger shows up as a deduction in payroll.
#[test]
fn test_ledger_feeds_payroll_deduction() {
    let ledger = YukyuLedger::new();
    ledger
        .grant("emp_001", 2025, dec("10"), date("2025-04-01"), "annual")
        .unwrap();
    let used: Decimal = ledger
        .use_days("emp_001", dec("1"), date("2025-10-15"), "leave")
        .unwrap()
        .iter()
        .map(|t| t.days)
        .sum();

    let calculator = standard_calculator();
    let employee = make_employee("emp_001", "1500");
    let records = vec![make_record("2025-10-01", (9, 0), (18, 0), 60)];
    let inputs = CalculationInputs {
        yukyu_days_approved: used,
        ..CalculationInputs::default()
    };

    let result = calculator
        .calculate(&employee, &records, &october_period(), &inputs)
        .unwrap();
    assert_eq!(result.deductions.yukyu_deduction, dec("12000"));
    assert_eq!(ledger.total_remaining("emp_001"), dec("9"));
}

// =============================================================================
// HTTP Surface
// =============================================================================

fn calculate_body() -> Value {
    json!({
        "company_id": "acme_staffing",
        "employee": {
            "id": "emp_001",
            "name": "Tanaka Hanako",
            "base_hourly_rate": "1500",
            "hire_date": "2023-04-01"
        },
        "period": {
            "start_date": "2025-10-01",
            "end_date": "2025-10-31",
            "holidays": []
        },
        "time_records": [
            {
                "work_date": "2025-10-01",
                "clock_in": "09:00:00",
                "clock_out": "18:00:00",
                "break_minutes": 60,
                "is_approved": true
            }
        ]
    })
}

#[tokio::test]
async fn test_http_calculate_returns_result() {
    let router = create_router(create_test_state());
    let (status, body) = post_json(router, "/payroll/calculate", calculate_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert_decimal_field(&body["amounts"]["gross"], "10500");
    assert_decimal_field(&body["amounts"]["net"], "8006");
    assert_decimal_field(&body["hours"]["regular"], "7");
}

#[tokio::test]
async fn test_http_unknown_company_is_400() {
    let router = create_router(create_test_state());
    let mut body = calculate_body();
    body["company_id"] = json!("globex");

    let (status, body) = post_json(router, "/payroll/calculate", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONFIGURATION_MISSING");
}

#[tokio::test]
async fn test_http_yukyu_lifecycle() {
    let state = create_test_state();

    let (status, granted) = post_json(
        create_router(state.clone()),
        "/yukyu/grant",
        json!({
            "employee_id": "emp_001",
            "fiscal_year": 2025,
            "days": "10",
            "grant_date": "2025-04-01",
            "reason": "annual grant"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&granted["remaining_days"], "10");
    assert_eq!(granted["expires_on"], "2027-04-01");

    let (status, transactions) = post_json(
        create_router(state.clone()),
        "/yukyu/use",
        json!({
            "employee_id": "emp_001",
            "days": "3",
            "usage_date": "2025-07-01",
            "reason": "summer leave"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transactions.as_array().unwrap().len(), 1);

    let (status, adjusted) = post_json(
        create_router(state.clone()),
        "/yukyu/adjust",
        json!({
            "employee_id": "emp_001",
            "fiscal_year": 2025,
            "delta_days": "-1",
            "adjustment_date": "2025-08-01",
            "reason": "clerical correction"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&adjusted["remaining_days"], "6");

    let (status, balances) = get_json(create_router(state.clone()), "/yukyu/emp_001/balances").await;
    assert_eq!(status, StatusCode::OK);
    let balances = balances.as_array().unwrap();
    assert_eq!(balances.len(), 1);
    assert_decimal_field(&balances[0]["used_days"], "3");

    let (status, transactions) =
        get_json(create_router(state), "/yukyu/emp_001/transactions").await;
    assert_eq!(status, StatusCode::OK);
    // grant + use + adjustment
    assert_eq!(transactions.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_http_insufficient_balance_is_422() {
    let state = create_test_state();
    state
        .ledger()
        .grant("emp_001", 2025, dec("2"), date("2025-04-01"), "annual")
        .unwrap();

    let (status, body) = post_json(
        create_router(state),
        "/yukyu/use",
        json!({
            "employee_id": "emp_001",
            "days": "5",
            "usage_date": "2025-07-01"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_http_batch_totals_and_isolation() {
    let router = create_router(create_test_state());

    let body = json!({
        "company_id": "acme_staffing",
        "period": {
            "start_date": "2025-10-01",
            "end_date": "2025-10-31",
            "holidays": []
        },
        "employees": [
            {
                "employee": {
                    "id": "emp_001",
                    "name": "Tanaka Hanako",
                    "base_hourly_rate": "1500",
                    "hire_date": "2023-04-01"
                },
                "time_records": [
                    {
                        "work_date": "2025-10-01",
                        "clock_in": "09:00:00",
                        "clock_out": "18:00:00",
                        "break_minutes": 60,
                        "is_approved": true
                    }
                ]
            },
            {
                "employee": {
                    "id": "emp_broken",
                    "name": "Suzuki Taro",
                    "base_hourly_rate": "0",
                    "hire_date": "2024-01-01"
                },
                "time_records": []
            }
        ]
    });

    let (status, body) = post_json(router, "/payroll/calculate/batch", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success_count"], 1);
    assert_eq!(body["error_count"], 1);
    assert_decimal_field(&body["total_gross"], "10500");
    assert!(body["results"][0]["result"].is_object());
    assert!(body["results"][1]["error"].is_object());
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;
    use payroll_engine::calculation::classify_hours;
    use proptest::prelude::*;

    // Clock times and breaks stay on the quarter-hour grid so every bucket
    // holds a whole number of quarter hours and minute-to-hour division is
    // exact.
    fn arbitrary_record() -> impl Strategy<Value = TimeRecord> {
        (0u32..28, 0u32..24, 0u32..4, 0u32..24, 0u32..4, 0u32..12).prop_map(
            |(day, in_h, in_q, out_h, out_q, break_q)| TimeRecord {
                work_date: date("2025-10-01") + chrono::Days::new(u64::from(day)),
                clock_in: NaiveTime::from_hms_opt(in_h, in_q * 15, 0).unwrap(),
                clock_out: NaiveTime::from_hms_opt(out_h, out_q * 15, 0).unwrap(),
                break_minutes: break_q * 15,
                is_approved: true,
            },
        )
    }

    proptest! {
        /// Every valid worked minute lands in exactly one bucket: the five
        /// bucket hours sum to the total, and the total matches the worked
        /// minutes recomputed independently from the raw records.
        #[test]
        fn hour_buckets_partition_total(records in proptest::collection::vec(arbitrary_record(), 0..15)) {
            let classified = classify_hours(&records, &october_period(), dec("160"));
            let b = &classified.breakdown;
            prop_assert_eq!(
                b.regular + b.overtime + b.night + b.holiday + b.sunday,
                b.total
            );

            let worked_minutes: i64 = records
                .iter()
                .map(|r| r.worked_minutes())
                .filter(|&m| m >= 0)
                .sum();
            prop_assert_eq!(b.total * dec("60"), Decimal::from(worked_minutes));
        }

        /// The conservation law holds for every balance after any sequence
        /// of grants, uses, expiries, and adjustments.
        #[test]
        fn conservation_holds_after_any_operation_sequence(
            operations in proptest::collection::vec((0u8..4, 1i64..15, 0u32..36), 1..40)
        ) {
            let ledger = YukyuLedger::new();
            let mut fiscal_year = 2020;
            for (kind, amount, month_offset) in operations {
                let day = date("2020-04-01") + chrono::Months::new(month_offset);
                match kind {
                    0 => {
                        fiscal_year += 1;
                        let _ = ledger.grant("emp_001", fiscal_year, Decimal::new(amount, 0), day, "grant");
                    }
                    1 => {
                        let _ = ledger.use_days("emp_001", Decimal::new(amount, 0), day, "use");
                    }
                    2 => {
                        ledger.expire(day);
                    }
                    _ => {
                        let _ = ledger.adjust("emp_001", fiscal_year, Decimal::new(-amount, 0), day, "adjust");
                    }
                }
                for balance in ledger.balances("emp_001") {
                    prop_assert!(balance.conservation_holds());
                }
            }
        }
    }
}
