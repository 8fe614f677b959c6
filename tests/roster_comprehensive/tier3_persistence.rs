//! Tier 3: Persistence
//!
//! The snapshot shape must round-trip losslessly through JSON, field
//! validation must hold on the way back in, and the deliberate absence
//! of referential integrity must survive a reload.

use crate::test_utils::{athlete, athlete_with_phone, contract, org};
use rosterdb::{Roster, RosterSnapshot, WeakIdentity};

#[test]
fn test_contract_roundtrip_preserves_both_equalities() {
    let original = contract(athlete("Alice", "Tennis"), org("Acme Sports"), "Tennis");
    let json = serde_json::to_string(&original).unwrap();
    let reloaded: rosterdb::Contract = serde_json::from_str(&json).unwrap();

    assert!(original.is_same(&reloaded));
    assert_eq!(original, reloaded);
}

#[test]
fn test_snapshot_shape_field_names() {
    let mut roster = Roster::new();
    roster.add_athlete(athlete("Alice", "Tennis")).unwrap();
    roster.add_organization(org("Acme")).unwrap();
    roster
        .add_contract(contract(athlete("Alice", "Tennis"), org("Acme"), "Tennis"))
        .unwrap();

    let json = serde_json::to_value(roster.snapshot()).unwrap();
    let athlete_rec = &json["athletes"][0];
    for field in ["name", "sport", "age", "phone", "email"] {
        assert!(athlete_rec.get(field).is_some(), "missing field {field}");
    }
    assert!(json["organizations"][0].get("contactName").is_some());
    let contract_rec = &json["contracts"][0];
    for field in ["athlete", "sport", "organization", "startDate", "endDate", "amount"] {
        assert!(contract_rec.get(field).is_some(), "missing field {field}");
    }
    // Numerics and dates persist as strings
    assert!(athlete_rec["age"].is_string());
    assert!(contract_rec["amount"].is_string());
    assert!(contract_rec["startDate"].is_string());
}

#[test]
fn test_full_store_roundtrip() {
    let mut roster = Roster::new();
    roster
        .add_athlete(athlete_with_phone("Alice", "Tennis", "91234567"))
        .unwrap();
    roster
        .add_athlete(athlete_with_phone("Bob", "Squash", "81234567"))
        .unwrap();
    roster.add_organization(org("Acme Sports")).unwrap();
    roster
        .add_contract(contract(athlete("Alice", "Tennis"), org("Acme Sports"), "Tennis"))
        .unwrap();

    let json = serde_json::to_string_pretty(&roster.snapshot()).unwrap();
    let snapshot: RosterSnapshot = serde_json::from_str(&json).unwrap();

    let mut reloaded = Roster::new();
    reloaded.reset_data(snapshot).unwrap();

    assert_eq!(reloaded.athletes(), roster.athletes());
    assert_eq!(reloaded.organizations(), roster.organizations());
    assert_eq!(reloaded.contracts(), roster.contracts());
}

#[test]
fn test_tampered_snapshot_fails_to_load() {
    let raw = r#"{
        "athletes": [
            {"name": "Alice", "sport": "Tennis", "age": "900", "phone": "91234567", "email": "a@example.com"}
        ],
        "organizations": [],
        "contracts": []
    }"#;
    let result: Result<RosterSnapshot, _> = serde_json::from_str(raw);
    assert!(result.is_err(), "out-of-range age must not deserialize");
}

#[test]
fn test_legacy_records_roundtrip_untouched() {
    let mut roster = Roster::new();
    let legacy = vec![
        serde_json::json!({"name": "Old Person", "tags": ["friend"]}),
        serde_json::json!({"anything": {"nested": [1, 2, 3]}}),
    ];
    roster.set_legacy_records(legacy.clone());

    let json = serde_json::to_string(&roster.snapshot()).unwrap();
    let snapshot: RosterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.persons, legacy);
}

#[test]
fn test_snapshot_omits_empty_legacy_list() {
    let roster = Roster::new();
    let json = serde_json::to_value(roster.snapshot()).unwrap();
    assert!(json.get("persons").is_none());
}

#[test]
fn test_dangling_contract_survives_reload() {
    // A contract whose athlete and organization are not in their lists
    let snapshot = RosterSnapshot {
        athletes: vec![],
        organizations: vec![],
        contracts: vec![contract(athlete("Ghost", "Tennis"), org("Nowhere"), "Tennis")],
        persons: vec![],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let reloaded: RosterSnapshot = serde_json::from_str(&json).unwrap();

    let mut roster = Roster::new();
    roster.reset_data(reloaded).unwrap();
    assert_eq!(roster.contracts().len(), 1);
    assert!(roster.athletes().is_empty());
}
