//! Search dispatch
//!
//! `find` is the one way a query changes what is visible: it installs a
//! case-insensitive substring predicate on the scope's entity kind and
//! resets the other two kinds to show-all, so at most one kind is ever
//! under active search-filtering. `refresh` resets all three
//! unconditionally.

use crate::scope::SearchScope;
use roster_core::{Athlete, Contract, EntityKind, Error, Organization, Result};
use roster_store::Roster;
use tracing::debug;

/// Result of a dispatched search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of entries in the just-updated filtered view
    pub matches: usize,
    /// Which entity kind's view the presentation layer should surface
    pub kind: EntityKind,
    /// Display label of the searched scope, for user feedback
    pub label: &'static str,
}

/// Case-insensitive substring containment
fn contains_ci(field: &str, keyword_lower: &str) -> bool {
    field.to_lowercase().contains(keyword_lower)
}

/// Run a keyword search over one scope
///
/// The keyword is trimmed and lowercased; the predicate tests the
/// scope's field for case-insensitive substring containment. The two
/// non-target kinds' filters are reset to show-all.
///
/// # Errors
///
/// Returns [`Error::EmptyKeyword`] if the keyword is empty or blank;
/// all three filters are left unchanged in that case.
pub fn find(roster: &mut Roster, scope: SearchScope, keyword: &str) -> Result<SearchOutcome> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }

    match scope {
        SearchScope::AthleteName | SearchScope::AthleteSport => {
            roster.set_athlete_filter(Box::new(move |athlete: &Athlete| {
                scope
                    .athlete_field(athlete)
                    .is_some_and(|field| contains_ci(field, &keyword))
            }));
        }
        SearchScope::OrgName => {
            roster.set_organization_filter(Box::new(move |organization: &Organization| {
                scope
                    .organization_field(organization)
                    .is_some_and(|field| contains_ci(field, &keyword))
            }));
        }
        SearchScope::ContractAthlete | SearchScope::ContractOrg | SearchScope::ContractSport => {
            roster.set_contract_filter(Box::new(move |contract: &Contract| {
                scope
                    .contract_field(contract)
                    .is_some_and(|field| contains_ci(field, &keyword))
            }));
        }
    }

    // Every kind but the searched one goes back to show-all
    for kind in EntityKind::ALL {
        if kind != scope.kind() {
            roster.reset_filter(kind);
        }
    }

    let matches = match scope.kind() {
        EntityKind::Athlete => roster.filtered_athletes().len(),
        EntityKind::Organization => roster.filtered_organizations().len(),
        EntityKind::Contract => roster.filtered_contracts().len(),
    };
    debug!(scope = scope.label(), matches, "search dispatched");

    Ok(SearchOutcome {
        matches,
        kind: scope.kind(),
        label: scope.label(),
    })
}

/// Reset all three filters to show-all
pub fn refresh(roster: &mut Roster) {
    roster.reset_filters();
    debug!("filters refreshed");
}
