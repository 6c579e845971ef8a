// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finlog::models::{NewOperation, OperationKind};
use finlog::store::Store;
use finlog::{catalog, cli, commands::exporter};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn store_with_two_ops() -> Store {
    let store = Store::open_in_memory().unwrap();
    for (kind, category, value, description) in [
        (OperationKind::Income, "salary", 1200, "Payroll"),
        (OperationKind::Expenses, "book", 15, "Field guide"),
    ] {
        store
            .create(NewOperation {
                value: Decimal::from(value),
                kind,
                description: description.to_string(),
                category: catalog::find(category, kind).unwrap().clone(),
            })
            .unwrap();
    }
    store
}

fn run_export(store: &Store, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "finlog",
        "export",
        "operations",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_operations_as_json_keeps_the_embedded_category() {
    let store = store_with_two_ops();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // chronological order: payroll was recorded first
    assert_eq!(items[0]["description"], "Payroll");
    assert_eq!(items[0]["type"], "income");
    assert_eq!(items[0]["value"], "1200");
    assert_eq!(items[0]["category"]["name"], "salary");
    assert_eq!(items[0]["category"]["icon"], "wallet");
    assert_eq!(items[0]["category"]["type"], "income");
    assert_eq!(items[1]["category"]["name"], "book");
}

#[test]
fn export_operations_as_csv_writes_a_header_and_all_rows() {
    let store = store_with_two_ops();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,datetime,type,category,icon,description,value");
    assert!(lines[1].contains("Payroll"));
    assert!(lines[2].contains("Field guide"));
}

#[test]
fn export_rejects_an_unknown_format() {
    let store = store_with_two_ops();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&store, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
