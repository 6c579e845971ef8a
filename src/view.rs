// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One pure pipeline from snapshot + filters to everything the presenters
//! render, recomputed whole after every mutation or filter change.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, CategoryTotal};
use crate::models::{FinancialOperation, OperationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewFilters {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub year: i32,
    pub month: u32,
}

impl ViewFilters {
    /// Initial period selection for the breakdown view: latest year on
    /// record; the current calendar month when any record carries it,
    /// otherwise the earliest month present. `None` on an empty snapshot.
    pub fn default_for(
        records: &[FinancialOperation],
        kind: OperationKind,
        now: DateTime<Utc>,
    ) -> Option<ViewFilters> {
        let years = aggregate::distinct_years(records);
        let months = aggregate::distinct_months(records);
        let year = *years.first()?;
        let month = if months.contains(&now.month()) {
            now.month()
        } else {
            *months.first()?
        };
        Some(ViewFilters { kind, year, month })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub breakdown: Vec<CategoryTotal>,
}

pub fn derive_view_state(records: &[FinancialOperation], filters: &ViewFilters) -> ViewState {
    ViewState {
        income: aggregate::total_by_kind(records, OperationKind::Income),
        expenses: aggregate::total_by_kind(records, OperationKind::Expenses),
        balance: aggregate::balance(records),
        years: aggregate::distinct_years(records),
        months: aggregate::distinct_months(records),
        breakdown: aggregate::category_breakdown(records, filters.kind, filters.year, filters.month),
    }
}
