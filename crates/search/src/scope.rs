//! Search scopes
//!
//! A search always targets exactly one (entity kind, field) pair out of
//! a closed set of six. The scope is plain data — target kind, display
//! label, field extractor — matched exhaustively; there is no open
//! registry of scopes to extend at runtime.

use roster_core::{Athlete, Contract, EntityKind, Organization};

/// The six (entity kind, field) pairs a search can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    /// Athlete list, matched on athlete name
    AthleteName,
    /// Athlete list, matched on sport
    AthleteSport,
    /// Organization list, matched on organization name
    OrgName,
    /// Contract list, matched on the contracted athlete's name
    ContractAthlete,
    /// Contract list, matched on the contracting organization's name
    ContractOrg,
    /// Contract list, matched on the contract's sport
    ContractSport,
}

impl SearchScope {
    /// All scopes, for iteration in tests and help text
    pub const ALL: [SearchScope; 6] = [
        SearchScope::AthleteName,
        SearchScope::AthleteSport,
        SearchScope::OrgName,
        SearchScope::ContractAthlete,
        SearchScope::ContractOrg,
        SearchScope::ContractSport,
    ];

    /// Which entity kind this scope filters (and which view the
    /// presentation layer should surface after the search)
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchScope::AthleteName | SearchScope::AthleteSport => EntityKind::Athlete,
            SearchScope::OrgName => EntityKind::Organization,
            SearchScope::ContractAthlete
            | SearchScope::ContractOrg
            | SearchScope::ContractSport => EntityKind::Contract,
        }
    }

    /// Display label for user feedback
    pub fn label(&self) -> &'static str {
        match self {
            SearchScope::AthleteName => "athlete name",
            SearchScope::AthleteSport => "athlete sport",
            SearchScope::OrgName => "organization name",
            SearchScope::ContractAthlete => "contract athlete",
            SearchScope::ContractOrg => "contract organization",
            SearchScope::ContractSport => "contract sport",
        }
    }

    /// The searched field of an athlete, if this scope targets athletes
    pub fn athlete_field<'a>(&self, athlete: &'a Athlete) -> Option<&'a str> {
        match self {
            SearchScope::AthleteName => Some(athlete.name().as_str()),
            SearchScope::AthleteSport => Some(athlete.sport().as_str()),
            _ => None,
        }
    }

    /// The searched field of an organization, if this scope targets them
    pub fn organization_field<'a>(&self, organization: &'a Organization) -> Option<&'a str> {
        match self {
            SearchScope::OrgName => Some(organization.name().as_str()),
            _ => None,
        }
    }

    /// The searched field of a contract, if this scope targets contracts
    pub fn contract_field<'a>(&self, contract: &'a Contract) -> Option<&'a str> {
        match self {
            SearchScope::ContractAthlete => Some(contract.athlete().name().as_str()),
            SearchScope::ContractOrg => Some(contract.organization().name().as_str()),
            SearchScope::ContractSport => Some(contract.sport().as_str()),
            _ => None,
        }
    }
}
