// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over an in-memory snapshot of operations. Nothing here
//! touches the store; callers fetch once and pass the slice in.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, FinancialOperation, OperationKind};

pub fn total_by_kind(records: &[FinancialOperation], kind: OperationKind) -> Decimal {
    records
        .iter()
        .filter(|op| op.kind == kind)
        .map(|op| op.value)
        .fold(Decimal::ZERO, |acc, v| acc + v)
}

pub fn balance(records: &[FinancialOperation]) -> Decimal {
    total_by_kind(records, OperationKind::Income) - total_by_kind(records, OperationKind::Expenses)
}

/// Calendar years present across the snapshot, deduplicated, newest first.
pub fn distinct_years(records: &[FinancialOperation]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|op| op.datetime.year()).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

/// Month-of-year values (1-12) present across the snapshot, deduplicated,
/// ascending. Months from different years collapse together; the period
/// picker offers (year, month) combinations from both lists.
pub fn distinct_months(records: &[FinancialOperation]) -> Vec<u32> {
    let mut months: Vec<u32> = records.iter().map(|op| op.datetime.month()).collect();
    months.sort_unstable();
    months.dedup();
    months
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Per-category totals for the exact (type, year, month) tuple, grouped by
/// category name and type, in first-seen order. An empty result is the
/// "no data" case, not an error.
pub fn category_breakdown(
    records: &[FinancialOperation],
    kind: OperationKind,
    year: i32,
    month: u32,
) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    let selected = records.iter().filter(|op| {
        op.kind == kind && op.datetime.year() == year && op.datetime.month() == month
    });
    for op in selected {
        match groups
            .iter_mut()
            .find(|g| g.category.name == op.category.name && g.category.kind == op.category.kind)
        {
            Some(group) => group.total += op.value,
            None => groups.push(CategoryTotal {
                category: op.category.clone(),
                total: op.value,
            }),
        }
    }
    groups
}
