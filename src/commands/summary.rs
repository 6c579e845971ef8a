// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::aggregate;
use crate::models::OperationKind;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let records = store.get_all(None)?;
    let income = aggregate::total_by_kind(&records, OperationKind::Income);
    let expenses = aggregate::total_by_kind(&records, OperationKind::Expenses);
    let balance = aggregate::balance(&records);

    let data = json!({
        "income": income,
        "expenses": expenses,
        "balance": balance,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expenses", "Balance"],
                vec![vec![income.to_string(), expenses.to_string(), balance.to_string()]],
            )
        );
    }
    Ok(())
}
