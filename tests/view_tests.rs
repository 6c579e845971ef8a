// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use finlog::catalog;
use finlog::models::{FinancialOperation, OperationKind};
use finlog::view::{derive_view_state, ViewFilters};
use rust_decimal::Decimal;

fn op(
    id: i64,
    value: i64,
    kind: OperationKind,
    category: &str,
    year: i32,
    month: u32,
) -> FinancialOperation {
    FinancialOperation {
        id,
        value: Decimal::from(value),
        kind,
        description: format!("op {}", id),
        category: catalog::find(category, kind).unwrap().clone(),
        datetime: Utc.with_ymd_and_hms(year, month, 15, 9, 30, 0).unwrap(),
    }
}

fn sample_records() -> Vec<FinancialOperation> {
    vec![
        op(1, 100, OperationKind::Income, "salary", 2024, 1),
        op(2, 40, OperationKind::Expenses, "shopping", 2024, 1),
        op(3, 10, OperationKind::Expenses, "book", 2024, 2),
    ]
}

#[test]
fn derive_view_state_composes_all_figures() {
    let records = sample_records();
    let filters = ViewFilters {
        kind: OperationKind::Expenses,
        year: 2024,
        month: 1,
    };

    let state = derive_view_state(&records, &filters);
    assert_eq!(state.income, Decimal::from(100));
    assert_eq!(state.expenses, Decimal::from(50));
    assert_eq!(state.balance, Decimal::from(50));
    assert_eq!(state.years, vec![2024]);
    assert_eq!(state.months, vec![1, 2]);
    assert_eq!(state.breakdown.len(), 1);
    assert_eq!(state.breakdown[0].category.name, "shopping");
    assert_eq!(state.breakdown[0].total, Decimal::from(40));
}

#[test]
fn view_state_on_empty_snapshot_is_all_zeros() {
    let filters = ViewFilters {
        kind: OperationKind::Income,
        year: 2024,
        month: 1,
    };
    let state = derive_view_state(&[], &filters);
    assert_eq!(state.income, Decimal::ZERO);
    assert_eq!(state.balance, Decimal::ZERO);
    assert!(state.years.is_empty());
    assert!(state.breakdown.is_empty());
}

#[test]
fn default_filters_pick_the_current_month_when_present() {
    let records = sample_records();
    let now = Utc.with_ymd_and_hms(2024, 2, 20, 10, 0, 0).unwrap();
    let filters = ViewFilters::default_for(&records, OperationKind::Expenses, now).unwrap();
    assert_eq!(filters.year, 2024);
    assert_eq!(filters.month, 2);
    assert_eq!(filters.kind, OperationKind::Expenses);
}

#[test]
fn default_filters_fall_back_to_the_earliest_month_on_record() {
    let records = sample_records();
    // July has no records; months on record are [1, 2]
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let filters = ViewFilters::default_for(&records, OperationKind::Income, now).unwrap();
    assert_eq!(filters.month, 1);
}

#[test]
fn default_filters_pick_the_latest_year() {
    let records = vec![
        op(1, 10, OperationKind::Income, "salary", 2023, 4),
        op(2, 10, OperationKind::Income, "salary", 2025, 4),
    ];
    let now = Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap();
    let filters = ViewFilters::default_for(&records, OperationKind::Income, now).unwrap();
    assert_eq!(filters.year, 2025);
    assert_eq!(filters.month, 4);
}

#[test]
fn default_filters_are_none_for_an_empty_snapshot() {
    let now = Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap();
    assert!(ViewFilters::default_for(&[], OperationKind::Income, now).is_none());
}
