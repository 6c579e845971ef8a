// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::db;
use crate::models::{Category, FinancialOperation, NewOperation, OperationKind};

/// Snapshot cap applied by the chart and list presenters when the user gives
/// no explicit limit.
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine platform-specific data dir")]
    DataDir,
    #[error("database schema version {0} is newer than this build supports")]
    SchemaVersion(i32),
    #[error("operation {id} is malformed: {reason}")]
    Corrupt { id: i64, reason: String },
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Durable collection of financial operations.
///
/// Single-owner service object around one SQLite connection: open once per
/// process, pass by reference, drop (or [`Store::close`]) to tear down. Each
/// create/delete runs as its own transaction; there is no multi-record
/// transaction path.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        db::init_schema(&conn)?;
        debug!(path = %path.display(), "opened store");
        Ok(Store { conn })
    }

    /// Open (creating if needed) the database in the platform data dir.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(&db::db_path()?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(Store { conn })
    }

    /// Explicit teardown. The CLI lets the handle drop instead; tests close
    /// to reopen the same file.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Storage(e))
    }

    /// Insert a new operation, assigning the next unused id and stamping the
    /// current time. Ids are never reused, even after deletes.
    pub fn create(&self, input: NewOperation) -> Result<i64, StoreError> {
        let datetime = Utc::now();
        self.conn.execute(
            "INSERT INTO financial_operations(value, type, description, category_name, category_icon, category_type, datetime)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                input.value.to_string(),
                input.kind.as_str(),
                input.description,
                input.category.name,
                input.category.icon,
                input.category.kind.as_str(),
                datetime,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, kind = input.kind.as_str(), "recorded operation");
        Ok(id)
    }

    /// Return operations ordered by timestamp descending (most recent
    /// first), id descending as tiebreak. `None` means uncapped.
    pub fn get_all(&self, limit: Option<usize>) -> Result<Vec<FinancialOperation>, StoreError> {
        // SQLite treats a negative LIMIT as no limit.
        let cap = limit.map_or(-1i64, |l| l as i64);
        let mut stmt = self.conn.prepare(
            "SELECT id, value, type, description, category_name, category_icon, category_type, datetime
             FROM financial_operations
             ORDER BY datetime DESC, id DESC
             LIMIT ?1",
        )?;
        let mut rows = stmt.query(params![cap])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(read_row(r)?);
        }
        Ok(data)
    }

    /// Delete by id. Deleting an id that does not exist is a no-op; the
    /// return value reports whether anything was removed.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM financial_operations WHERE id=?1", params![id])?;
        debug!(id, existed = changed > 0, "deleted operation");
        Ok(changed > 0)
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM financial_operations", [], |r| r.get(0))?)
    }

    pub fn schema_version(&self) -> Result<i32, StoreError> {
        Ok(self.conn.pragma_query_value(None, "user_version", |r| r.get(0))?)
    }

    /// Raw sweep over every stored row, collecting anything that violates the
    /// record invariants instead of failing on the first bad row. Feeds
    /// `finlog doctor`.
    pub fn integrity_issues(&self) -> Result<Vec<(i64, String)>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, value, type, description, category_type, datetime
             FROM financial_operations ORDER BY id",
        )?;
        let mut cur = stmt.query([])?;
        let mut issues = Vec::new();
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let value_s: String = r.get(1)?;
            let kind_s: String = r.get(2)?;
            let description: String = r.get(3)?;
            let category_kind_s: String = r.get(4)?;

            match value_s.parse::<Decimal>() {
                Ok(v) if v <= Decimal::ZERO => {
                    issues.push((id, format!("non-positive value {}", v)));
                }
                Ok(_) => {}
                Err(_) => issues.push((id, format!("unparseable value '{}'", value_s))),
            }
            if kind_s.parse::<OperationKind>().is_err() {
                issues.push((id, format!("unknown type '{}'", kind_s)));
            }
            if kind_s != category_kind_s {
                issues.push((id, "category type does not match operation type".to_string()));
            }
            if description.trim().is_empty() {
                issues.push((id, "empty description".to_string()));
            }
            if r.get::<_, DateTime<Utc>>(5).is_err() {
                issues.push((id, "unparseable datetime".to_string()));
            }
        }
        Ok(issues)
    }
}

fn read_row(r: &rusqlite::Row) -> Result<FinancialOperation, StoreError> {
    let id: i64 = r.get(0)?;
    let value_s: String = r.get(1)?;
    let kind_s: String = r.get(2)?;
    let description: String = r.get(3)?;
    let category_name: String = r.get(4)?;
    let category_icon: String = r.get(5)?;
    let category_kind_s: String = r.get(6)?;
    let datetime: DateTime<Utc> = r.get(7)?;

    let value = value_s.parse::<Decimal>().map_err(|e| corrupt(id, format!("value '{}': {}", value_s, e)))?;
    let kind = kind_s
        .parse::<OperationKind>()
        .map_err(|_| corrupt(id, format!("unknown type '{}'", kind_s)))?;
    let category_kind = category_kind_s
        .parse::<OperationKind>()
        .map_err(|_| corrupt(id, format!("unknown category type '{}'", category_kind_s)))?;

    Ok(FinancialOperation {
        id,
        value,
        kind,
        description,
        category: Category {
            name: category_name,
            icon: category_icon,
            kind: category_kind,
        },
        datetime,
    })
}

fn corrupt(id: i64, reason: String) -> StoreError {
    warn!(id, %reason, "corrupt row");
    StoreError::Corrupt { id, reason }
}
