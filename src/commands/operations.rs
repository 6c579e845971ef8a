// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;

use crate::catalog;
use crate::models::{NewOperation, OperationKind, ValidationError};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind: OperationKind = sub.get_one::<String>("type").unwrap().parse()?;
    let name = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;

    // Denormalized copy: the record keeps this category even if the catalog
    // changes later.
    let category = catalog::find(name, kind)
        .ok_or_else(|| ValidationError::UnknownCategory {
            name: name.clone(),
            kind,
        })?
        .clone();

    let op = NewOperation {
        value,
        kind,
        description,
        category,
    };
    op.validate()?;

    let id = store.create(op)?;
    println!("Recorded {} of {} in '{}' (id: {})", kind, value, name, id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.datetime.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.value.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Datetime", "Type", "Category", "Description", "Value"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_by_id(id)? {
        println!("Deleted operation {}", id);
    } else {
        println!("No operation with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct OperationRow {
    pub id: i64,
    pub datetime: String,
    pub r#type: String,
    pub category: String,
    pub description: String,
    pub value: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<OperationRow>> {
    let limit = sub.get_one::<usize>("limit").copied();
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<OperationKind>())
        .transpose()?;
    let year = sub.get_one::<i32>("year").copied();
    let month = sub.get_one::<u32>("month").copied();
    let category = sub.get_one::<String>("category");

    let records = store.get_all(limit)?;
    let data = records
        .iter()
        .filter(|op| kind.is_none_or(|k| op.kind == k))
        .filter(|op| year.is_none_or(|y| op.datetime.year() == y))
        .filter(|op| month.is_none_or(|mo| op.datetime.month() == mo))
        .filter(|op| category.is_none_or(|c| op.category.name == *c))
        .map(|op| OperationRow {
            id: op.id,
            datetime: op.datetime.format("%Y-%m-%d %H:%M").to_string(),
            r#type: op.kind.to_string(),
            category: op.category.name.clone(),
            description: op.description.clone(),
            value: op.value.to_string(),
        })
        .collect();
    Ok(data)
}
