// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::db;
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    let version = store.schema_version()?;
    if version != db::SCHEMA_VERSION {
        rows.push(vec![
            "schema_version".into(),
            format!("expected {}, found {}", db::SCHEMA_VERSION, version),
        ]);
    }

    for (id, problem) in store.integrity_issues()? {
        rows.push(vec![problem, format!("operation {}", id)]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found ({} operations)", store.count()?);
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
