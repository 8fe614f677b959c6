//! Roster: the aggregate store
//!
//! Owns one [`UniqueList`] per entity kind plus the [`FilterState`] that
//! decides which subset of each is visible. A fourth, legacy record list
//! rides along untyped: the command layer may populate it, nothing in
//! the core reads it, and it round-trips through snapshots untouched.
//!
//! The store deliberately does **not** enforce referential integrity:
//! deleting an athlete leaves that athlete's contracts in place, and
//! `reset_data` accepts a contract set referencing athletes or
//! organizations absent from the accompanying lists. Contracts are
//! allowed to outlive a deleted profile.

use crate::filter::{FilterState, Predicate};
use crate::unique_list::UniqueList;
use roster_core::{Athlete, Contract, EntityKind, Organization, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable snapshot of the whole store
///
/// This is the persisted shape: three named record lists, plus whatever
/// legacy records the command layer carries. Field types re-validate on
/// deserialization, so a tampered snapshot fails to load instead of
/// loading invalid data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Athlete records, in display order
    pub athletes: Vec<Athlete>,
    /// Organization records, in display order
    pub organizations: Vec<Organization>,
    /// Contract records, in display order
    pub contracts: Vec<Contract>,
    /// Opaque legacy records, carried through untouched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<serde_json::Value>,
}

/// The aggregate store: three unique collections plus filter state
#[derive(Debug)]
pub struct Roster {
    athletes: UniqueList<Athlete>,
    organizations: UniqueList<Organization>,
    contracts: UniqueList<Contract>,
    legacy: Vec<serde_json::Value>,
    filters: FilterState,
}

impl Roster {
    /// Create an empty store with show-all filters
    pub fn new() -> Self {
        Roster {
            athletes: UniqueList::new(EntityKind::Athlete),
            organizations: UniqueList::new(EntityKind::Organization),
            contracts: UniqueList::new(EntityKind::Contract),
            legacy: Vec::new(),
            filters: FilterState::new(),
        }
    }

    // ========== Athletes ==========

    /// True if a weakly-same athlete is stored
    pub fn has_athlete(&self, probe: &Athlete) -> bool {
        self.athletes.contains(probe)
    }

    /// Add an athlete (weak-identity duplicate check)
    pub fn add_athlete(&mut self, athlete: Athlete) -> Result<()> {
        self.athletes.add(athlete)
    }

    /// Remove the athlete strongly equal to `target`
    pub fn remove_athlete(&mut self, target: &Athlete) -> Result<()> {
        self.athletes.remove(target)
    }

    /// Full athlete list, insertion order
    pub fn athletes(&self) -> &[Athlete] {
        self.athletes.as_slice()
    }

    /// Athletes admitted by the active filter
    pub fn filtered_athletes(&self) -> Vec<&Athlete> {
        self.athletes
            .iter()
            .filter(|a| self.filters.admits_athlete(a))
            .collect()
    }

    // ========== Organizations ==========

    /// True if a weakly-same organization is stored
    pub fn has_organization(&self, probe: &Organization) -> bool {
        self.organizations.contains(probe)
    }

    /// Add an organization (weak-identity duplicate check)
    pub fn add_organization(&mut self, organization: Organization) -> Result<()> {
        self.organizations.add(organization)
    }

    /// Remove the organization strongly equal to `target`
    pub fn remove_organization(&mut self, target: &Organization) -> Result<()> {
        self.organizations.remove(target)
    }

    /// Replace the organization weakly matching `target`, keeping its position
    pub fn set_organization(
        &mut self,
        target: &Organization,
        replacement: Organization,
    ) -> Result<()> {
        self.organizations.set_one(target, replacement)
    }

    /// Full organization list, insertion order
    pub fn organizations(&self) -> &[Organization] {
        self.organizations.as_slice()
    }

    /// Organizations admitted by the active filter
    pub fn filtered_organizations(&self) -> Vec<&Organization> {
        self.organizations
            .iter()
            .filter(|o| self.filters.admits_organization(o))
            .collect()
    }

    // ========== Contracts ==========

    /// True if a weakly-same contract is stored
    pub fn has_contract(&self, probe: &Contract) -> bool {
        self.contracts.contains(probe)
    }

    /// Add a contract (weak-identity duplicate check)
    ///
    /// The referenced athlete and organization are *not* required to be
    /// present in their collections.
    pub fn add_contract(&mut self, contract: Contract) -> Result<()> {
        self.contracts.add(contract)
    }

    /// Remove the contract strongly equal to `target`
    pub fn remove_contract(&mut self, target: &Contract) -> Result<()> {
        self.contracts.remove(target)
    }

    /// Replace the contract weakly matching `target`, keeping its position
    pub fn set_contract(&mut self, target: &Contract, replacement: Contract) -> Result<()> {
        self.contracts.set_one(target, replacement)
    }

    /// Full contract list, insertion order
    pub fn contracts(&self) -> &[Contract] {
        self.contracts.as_slice()
    }

    /// Contracts admitted by the active filter
    pub fn filtered_contracts(&self) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| self.filters.admits_contract(c))
            .collect()
    }

    // ========== Filters ==========

    /// Install a new athlete visibility predicate
    pub fn set_athlete_filter(&mut self, predicate: Predicate<Athlete>) {
        self.filters.set_athletes(predicate);
    }

    /// Install a new organization visibility predicate
    pub fn set_organization_filter(&mut self, predicate: Predicate<Organization>) {
        self.filters.set_organizations(predicate);
    }

    /// Install a new contract visibility predicate
    pub fn set_contract_filter(&mut self, predicate: Predicate<Contract>) {
        self.filters.set_contracts(predicate);
    }

    /// Reset one kind's predicate to show-all
    pub fn reset_filter(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Athlete => self.filters.reset_athletes(),
            EntityKind::Organization => self.filters.reset_organizations(),
            EntityKind::Contract => self.filters.reset_contracts(),
        }
    }

    /// Reset all three predicates to show-all
    pub fn reset_filters(&mut self) {
        self.filters.reset_all();
    }

    // ========== Snapshots ==========

    /// Capture the full store contents (filters are session state and are
    /// not part of the persisted shape)
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            athletes: self.athletes.iter().cloned().collect(),
            organizations: self.organizations.iter().cloned().collect(),
            contracts: self.contracts.iter().cloned().collect(),
            persons: self.legacy.clone(),
        }
    }

    /// Replace all collections from a snapshot
    ///
    /// Each collection is validated for internal weak-identity collisions
    /// before anything is replaced, so a bad snapshot leaves the store
    /// untouched. No cross-collection validation happens: contracts may
    /// reference athletes or organizations missing from the snapshot.
    pub fn reset_data(&mut self, snapshot: RosterSnapshot) -> Result<()> {
        let mut athletes = UniqueList::new(EntityKind::Athlete);
        athletes.set_all(snapshot.athletes)?;
        let mut organizations = UniqueList::new(EntityKind::Organization);
        organizations.set_all(snapshot.organizations)?;
        let mut contracts = UniqueList::new(EntityKind::Contract);
        contracts.set_all(snapshot.contracts)?;

        self.athletes = athletes;
        self.organizations = organizations;
        self.contracts = contracts;
        self.legacy = snapshot.persons;
        debug!(
            athletes = self.athletes.len(),
            organizations = self.organizations.len(),
            contracts = self.contracts.len(),
            "reset store from snapshot"
        );
        Ok(())
    }

    /// The opaque legacy records (unread by the core)
    pub fn legacy_records(&self) -> &[serde_json::Value] {
        &self.legacy
    }

    /// Replace the opaque legacy records
    pub fn set_legacy_records(&mut self, records: Vec<serde_json::Value>) {
        self.legacy = records;
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
