// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

use crate::models::{Category, OperationKind};

// Fixed catalog, ordered income first then expenses. Read-only at runtime;
// operations embed a copy of their entry, so editing this list never rewrites
// stored history.
static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    fn cat(name: &str, icon: &str, kind: OperationKind) -> Category {
        Category {
            name: name.to_string(),
            icon: icon.to_string(),
            kind,
        }
    }

    vec![
        cat("salary", "wallet", OperationKind::Income),
        cat("awards", "dollar-square", OperationKind::Income),
        cat("coupons", "ticket-star", OperationKind::Income),
        cat("sale", "percentage-square", OperationKind::Income),
        cat("grants", "gift", OperationKind::Income),
        cat("other", "category-2", OperationKind::Income),
        cat("shopping", "shopping-bag", OperationKind::Expenses),
        cat("education", "teacher", OperationKind::Expenses),
        cat("gift", "gift", OperationKind::Expenses),
        cat("book", "book", OperationKind::Expenses),
        cat("social", "people", OperationKind::Expenses),
        cat("other", "category-2", OperationKind::Expenses),
    ]
});

pub fn all() -> &'static [Category] {
    &CATEGORIES
}

pub fn for_kind(kind: OperationKind) -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter().filter(move |c| c.kind == kind)
}

/// Category names repeat across types ("other" exists on both sides), so
/// lookup is always by name and type together.
pub fn find(name: &str, kind: OperationKind) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name && c.kind == kind)
}
