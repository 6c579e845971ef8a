// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

use crate::models::OperationKind;
use crate::store::{Store, DEFAULT_SNAPSHOT_LIMIT};
use crate::utils::{maybe_print_json, pretty_table};
use crate::view::{self, ViewFilters};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let kind = m
        .get_one::<String>("type")
        .map(|s| s.parse::<OperationKind>())
        .transpose()?
        .unwrap_or(OperationKind::Income);

    let records = store.get_all(Some(DEFAULT_SNAPSHOT_LIMIT))?;
    let Some(mut filters) = ViewFilters::default_for(&records, kind, Utc::now()) else {
        println!("no data");
        return Ok(());
    };
    if let Some(year) = m.get_one::<i32>("year") {
        filters.year = *year;
    }
    if let Some(month) = m.get_one::<u32>("month") {
        filters.month = *month;
    }

    let state = view::derive_view_state(&records, &filters);
    if state.breakdown.is_empty() {
        println!(
            "no data for {} {}-{:02}",
            filters.kind, filters.year, filters.month
        );
        return Ok(());
    }

    let data = json!({
        "type": filters.kind,
        "year": filters.year,
        "month": filters.month,
        "breakdown": state.breakdown,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let total: Decimal = state
            .breakdown
            .iter()
            .map(|g| g.total)
            .fold(Decimal::ZERO, |acc, v| acc + v);
        let rows: Vec<Vec<String>> = state
            .breakdown
            .iter()
            .map(|g| {
                let share = (g.total * Decimal::from(100) / total).round_dp(1);
                vec![
                    g.category.name.clone(),
                    g.total.to_string(),
                    format!("{}%", share),
                ]
            })
            .collect();
        println!("{} {}-{:02}", filters.kind, filters.year, filters.month);
        println!("{}", pretty_table(&["Category", "Total", "Share"], rows));
    }
    Ok(())
}
