// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finlog::catalog;
use finlog::models::{NewOperation, OperationKind, ValidationError};
use rust_decimal::Decimal;

fn base() -> NewOperation {
    NewOperation {
        value: Decimal::from(10),
        kind: OperationKind::Expenses,
        description: "Lunch".to_string(),
        category: catalog::find("social", OperationKind::Expenses)
            .unwrap()
            .clone(),
    }
}

#[test]
fn a_well_formed_operation_validates() {
    assert_eq!(base().validate(), Ok(()));
}

#[test]
fn empty_description_is_rejected() {
    let mut op = base();
    op.description = "   ".to_string();
    assert_eq!(op.validate(), Err(ValidationError::EmptyDescription));
}

#[test]
fn zero_and_negative_values_are_rejected() {
    let mut op = base();
    op.value = Decimal::ZERO;
    assert!(matches!(
        op.validate(),
        Err(ValidationError::NonPositiveValue(_))
    ));
    op.value = Decimal::from(-5);
    assert!(matches!(
        op.validate(),
        Err(ValidationError::NonPositiveValue(_))
    ));
}

#[test]
fn category_kind_must_match_operation_kind() {
    let mut op = base();
    op.category = catalog::find("salary", OperationKind::Income).unwrap().clone();
    assert!(matches!(
        op.validate(),
        Err(ValidationError::CategoryKindMismatch { .. })
    ));
}

#[test]
fn catalog_is_partitioned_by_kind() {
    assert!(catalog::find("salary", OperationKind::Income).is_some());
    assert!(catalog::find("salary", OperationKind::Expenses).is_none());
    assert!(catalog::find("shopping", OperationKind::Expenses).is_some());
    assert!(catalog::find("shopping", OperationKind::Income).is_none());

    // "other" exists on both sides as distinct entries
    let income_other = catalog::find("other", OperationKind::Income).unwrap();
    let expense_other = catalog::find("other", OperationKind::Expenses).unwrap();
    assert_ne!(income_other, expense_other);

    assert_eq!(catalog::for_kind(OperationKind::Income).count(), 6);
    assert_eq!(catalog::for_kind(OperationKind::Expenses).count(), 6);
    assert_eq!(catalog::all().len(), 12);
}

#[test]
fn operation_kind_parses_and_prints_its_wire_names() {
    assert_eq!("income".parse::<OperationKind>(), Ok(OperationKind::Income));
    assert_eq!(
        "expenses".parse::<OperationKind>(),
        Ok(OperationKind::Expenses)
    );
    assert!("Income".parse::<OperationKind>().is_err());
    assert_eq!(OperationKind::Income.to_string(), "income");
    assert_eq!(OperationKind::Expenses.to_string(), "expenses");
}
