// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog;
use crate::models::OperationKind;
use crate::utils::pretty_table;

// The catalog is fixed configuration; there is nothing to add or remove.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let kind = m
        .get_one::<String>("type")
        .map(|s| s.parse::<OperationKind>())
        .transpose()?;

    let mut data = Vec::new();
    for cat in catalog::all() {
        if kind.is_none_or(|k| cat.kind == k) {
            data.push(vec![
                cat.name.clone(),
                cat.icon.clone(),
                cat.kind.to_string(),
            ]);
        }
    }
    println!("{}", pretty_table(&["Category", "Icon", "Type"], data));
    Ok(())
}
