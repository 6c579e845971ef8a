// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

use crate::store::StoreError;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Finlog", "finlog"));

/// Current on-disk schema version, stamped into `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

pub fn db_path() -> Result<PathBuf, StoreError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::DataDir)?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("finlog.sqlite"))
}

/// Ensure the operation table and its timestamp index exist.
///
/// Reopening an already-initialized database is a no-op; a database stamped
/// with a newer schema version is refused rather than touched.
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;
    if version > SCHEMA_VERSION {
        return Err(StoreError::SchemaVersion(version));
    }

    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS financial_operations(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        value TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('income','expenses')),
        description TEXT NOT NULL,
        category_name TEXT NOT NULL,
        category_icon TEXT NOT NULL,
        category_type TEXT NOT NULL CHECK(category_type IN ('income','expenses')),
        datetime TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_financial_operations_datetime
        ON financial_operations(datetime);
    "#,
    )?;

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}
