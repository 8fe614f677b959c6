//! Tier 1: Collection Semantics
//!
//! The weak-identity / strong-equality split:
//! - containment and add use weak identity (same real-world entity)
//! - remove uses strong equality (exact stored value)
//! - bulk and in-place replace validate before mutating

use crate::test_utils::{athlete, athlete_with_phone, contract, org, org_with_contact};
use rosterdb::{EntityKind, Error, Roster, WeakIdentity};

#[test]
fn test_add_then_add_same_weak_identity_fails() {
    let mut roster = Roster::new();
    roster
        .add_athlete(athlete_with_phone("Alice", "Tennis", "91234567"))
        .unwrap();

    // Different phone, same (name, sport): still a duplicate
    let err = roster
        .add_athlete(athlete_with_phone("Alice", "Tennis", "81111111"))
        .unwrap_err();
    assert_eq!(err, Error::Duplicate(EntityKind::Athlete));
    assert_eq!(roster.athletes().len(), 1);
}

#[test]
fn test_same_name_different_sport_is_not_a_duplicate() {
    let mut roster = Roster::new();
    roster.add_athlete(athlete("Alice", "Tennis")).unwrap();
    roster.add_athlete(athlete("Alice", "Squash")).unwrap();
    assert_eq!(roster.athletes().len(), 2);
}

#[test]
fn test_remove_weakly_same_but_not_equal_fails() {
    let mut roster = Roster::new();
    roster
        .add_athlete(athlete_with_phone("Alice", "Tennis", "91234567"))
        .unwrap();

    let probe = athlete_with_phone("Alice", "Tennis", "81111111");
    assert!(roster.has_athlete(&probe), "weakly contained");
    let err = roster.remove_athlete(&probe).unwrap_err();
    assert_eq!(err, Error::NotFound(EntityKind::Athlete));
    assert_eq!(roster.athletes().len(), 1);
}

#[test]
fn test_case_insensitive_identity_across_kinds() {
    let mut roster = Roster::new();
    roster.add_athlete(athlete("Alice Tan", "Tennis")).unwrap();
    roster.add_organization(org("Acme Sports")).unwrap();

    assert!(roster.has_athlete(&athlete("ALICE TAN", "tennis")));
    assert!(roster.has_organization(&org("ACME SPORTS")));

    let err = roster.add_organization(org("acme sports")).unwrap_err();
    assert_eq!(err, Error::Duplicate(EntityKind::Organization));
}

#[test]
fn test_organization_weak_identity_includes_contact() {
    let mut roster = Roster::new();
    roster
        .add_organization(org_with_contact("Acme", "Jane Lee"))
        .unwrap();
    // Same name, different contact person: a different organization entry
    roster
        .add_organization(org_with_contact("Acme", "Joan Ng"))
        .unwrap();
    assert_eq!(roster.organizations().len(), 2);
}

#[test]
fn test_contract_identity_built_from_weak_parts() {
    let mut roster = Roster::new();
    roster
        .add_contract(contract(
            athlete_with_phone("Alice", "Tennis", "91234567"),
            org("Acme"),
            "Tennis",
        ))
        .unwrap();

    // The embedded athlete differs only in non-identity fields: duplicate
    let err = roster
        .add_contract(contract(
            athlete_with_phone("ALICE", "tennis", "81111111"),
            org("ACME"),
            "Tennis",
        ))
        .unwrap_err();
    assert_eq!(err, Error::Duplicate(EntityKind::Contract));
}

#[test]
fn test_contract_different_terms_is_different_contract() {
    let mut roster = Roster::new();
    let c1 = crate::test_utils::contract_with_amount(
        athlete("Alice", "Tennis"),
        org("Acme"),
        "Tennis",
        "500",
    );
    let c2 = crate::test_utils::contract_with_amount(
        athlete("Alice", "Tennis"),
        org("Acme"),
        "Tennis",
        "600",
    );
    assert!(!c1.is_same(&c2));

    roster.add_contract(c1).unwrap();
    roster.add_contract(c2).unwrap();
    assert_eq!(roster.contracts().len(), 2);
}

#[test]
fn test_set_one_contract_preserves_position() {
    let mut roster = Roster::new();
    let first = contract(athlete("Alice", "Tennis"), org("Acme"), "Tennis");
    let second = contract(athlete("Bob", "Squash"), org("Acme"), "Squash");
    roster.add_contract(first.clone()).unwrap();
    roster.add_contract(second).unwrap();

    let replacement = crate::test_utils::contract_with_amount(
        athlete("Alice", "Tennis"),
        org("Acme"),
        "Tennis",
        "999",
    );
    roster.set_contract(&first, replacement.clone()).unwrap();

    assert_eq!(roster.contracts()[0], replacement);
    assert_eq!(roster.contracts().len(), 2);
}

#[test]
fn test_set_one_collision_with_other_contract() {
    let mut roster = Roster::new();
    let first = contract(athlete("Alice", "Tennis"), org("Acme"), "Tennis");
    let second = contract(athlete("Bob", "Squash"), org("Acme"), "Squash");
    roster.add_contract(first.clone()).unwrap();
    roster.add_contract(second.clone()).unwrap();

    let err = roster.set_contract(&first, second).unwrap_err();
    assert_eq!(err, Error::Duplicate(EntityKind::Contract));
}

#[test]
fn test_display_order_is_insertion_order() {
    let mut roster = Roster::new();
    for name in ["Carol", "Alice", "Bob"] {
        roster.add_athlete(athlete(name, "Tennis")).unwrap();
    }
    let names: Vec<&str> = roster.athletes().iter().map(|a| a.name().as_str()).collect();
    assert_eq!(names, ["Carol", "Alice", "Bob"]);
}
