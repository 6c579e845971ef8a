// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("operations", sub)) => export_operations(store, sub),
        _ => Ok(()),
    }
}

fn export_operations(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut records = store.get_all(None)?;
    // get_all is most-recent-first; exports read better oldest-first.
    records.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "datetime",
                "type",
                "category",
                "icon",
                "description",
                "value",
            ])?;
            for op in &records {
                wtr.write_record([
                    op.id.to_string(),
                    op.datetime.to_rfc3339(),
                    op.kind.to_string(),
                    op.category.name.clone(),
                    op.category.icon.clone(),
                    op.description.clone(),
                    op.value.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&records)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} operations to {}", records.len(), out);
    Ok(())
}
