//! Tier 2: Search & Filtering
//!
//! At most one entity kind is ever under active search-filtering; the
//! concrete scenarios from the product spec are pinned here.

use crate::test_utils::{athlete, contract, org};
use rosterdb::{find, refresh, EntityKind, Error, Roster, SearchScope};

fn sample() -> Roster {
    crate::test_utils::init_tracing();
    let mut roster = Roster::new();
    roster.add_athlete(athlete("Alice", "Tennis")).unwrap();
    roster.add_athlete(athlete("Bob", "Tennis")).unwrap();
    roster.add_organization(org("Acme Sports")).unwrap();
    roster
        .add_contract(contract(athlete("Alice", "Tennis"), org("Acme Sports"), "Tennis"))
        .unwrap();
    roster
        .add_contract(contract(athlete("Bob", "Tennis"), org("Acme Sports"), "Football"))
        .unwrap();
    roster
}

#[test]
fn test_find_alice_returns_only_alice() {
    let mut roster = sample();
    let outcome = find(&mut roster, SearchScope::AthleteName, "Alice").unwrap();

    assert_eq!(outcome.matches, 1);
    let view = roster.filtered_athletes();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name().as_str(), "Alice");
}

#[test]
fn test_find_sport_tennis_matches_both() {
    let mut roster = sample();
    let outcome = find(&mut roster, SearchScope::AthleteSport, "tennis").unwrap();
    assert_eq!(outcome.matches, 2);
}

#[test]
fn test_athlete_search_leaves_other_views_full() {
    let mut roster = sample();
    find(&mut roster, SearchScope::AthleteName, "ali").unwrap();

    assert_eq!(
        roster.filtered_organizations().len(),
        roster.organizations().len()
    );
    assert_eq!(roster.filtered_contracts().len(), roster.contracts().len());
}

#[test]
fn test_consecutive_searches_keep_one_active_filter() {
    let mut roster = sample();
    find(&mut roster, SearchScope::AthleteName, "ali").unwrap();
    find(&mut roster, SearchScope::ContractSport, "foot").unwrap();

    // The athlete filter from the first search is gone
    assert_eq!(roster.filtered_athletes().len(), roster.athletes().len());
    assert_eq!(roster.filtered_contracts().len(), 1);
}

#[test]
fn test_contract_sport_then_refresh_restores_all_views() {
    let mut roster = sample();
    find(&mut roster, SearchScope::ContractSport, "foot").unwrap();
    assert_eq!(roster.filtered_contracts().len(), 1);

    refresh(&mut roster);
    assert_eq!(roster.filtered_athletes().len(), roster.athletes().len());
    assert_eq!(
        roster.filtered_organizations().len(),
        roster.organizations().len()
    );
    assert_eq!(roster.filtered_contracts().len(), roster.contracts().len());
}

#[test]
fn test_every_scope_targets_its_kind() {
    for scope in SearchScope::ALL {
        let mut roster = sample();
        let outcome = find(&mut roster, scope, "a").unwrap();
        assert_eq!(outcome.kind, scope.kind());
    }
}

#[test]
fn test_empty_keyword_never_matches_everything() {
    let mut roster = sample();
    for keyword in ["", "  ", "\t"] {
        let err = find(&mut roster, SearchScope::OrgName, keyword).unwrap_err();
        assert_eq!(err, Error::EmptyKeyword);
    }
}

#[test]
fn test_contract_athlete_scope_searches_embedded_name() {
    let mut roster = sample();
    let outcome = find(&mut roster, SearchScope::ContractAthlete, "bob").unwrap();
    assert_eq!(outcome.matches, 1);
    assert_eq!(
        roster.filtered_contracts()[0].athlete().name().as_str(),
        "Bob"
    );
}

#[test]
fn test_search_matches_survive_store_mutation() {
    let mut roster = sample();
    find(&mut roster, SearchScope::AthleteName, "ali").unwrap();
    roster.add_athlete(athlete("Alicia", "Squash")).unwrap();

    // The installed predicate applies to the new entry on recompute
    assert_eq!(roster.filtered_athletes().len(), 2);
}

#[test]
fn test_focus_hint_matches_searched_kind() {
    let mut roster = sample();
    let outcome = find(&mut roster, SearchScope::OrgName, "acme").unwrap();
    assert_eq!(outcome.kind, EntityKind::Organization);
    assert_eq!(outcome.label, "organization name");
}
