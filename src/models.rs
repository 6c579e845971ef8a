// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Income,
    Expenses,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Income, OperationKind::Expenses];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Income => "income",
            OperationKind::Expenses => "expenses",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(OperationKind::Income),
            "expenses" => Ok(OperationKind::Expenses),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// A catalog entry, copied into each operation at entry time. Stored records
/// keep the copy they were created with even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOperation {
    pub id: i64,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub description: String,
    pub category: Category,
    pub datetime: DateTime<Utc>,
}

/// Input for [`crate::store::Store::create`]; the store assigns the id and
/// stamps the timestamp.
#[derive(Debug, Clone)]
pub struct NewOperation {
    pub value: Decimal,
    pub kind: OperationKind,
    pub description: String,
    pub category: Category,
}

impl NewOperation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue(self.value));
        }
        if self.category.kind != self.kind {
            return Err(ValidationError::CategoryKindMismatch {
                category: self.category.name.clone(),
                category_kind: self.category.kind,
                kind: self.kind,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("value must be positive, got {0}")]
    NonPositiveValue(Decimal),
    #[error("unknown operation type '{0}' (use income|expenses)")]
    UnknownKind(String),
    #[error("unknown category '{name}' for type {kind}")]
    UnknownCategory { name: String, kind: OperationKind },
    #[error("category '{category}' is a {category_kind} category, operation is {kind}")]
    CategoryKindMismatch {
        category: String,
        category_kind: OperationKind,
        kind: OperationKind,
    },
}
