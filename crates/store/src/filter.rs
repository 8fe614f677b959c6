//! Per-kind filter state
//!
//! The store carries exactly one active predicate per entity kind,
//! defaulting to show-all. This is explicit state on the store, not an
//! ambient global: filtered views are recomputed from the current
//! predicate on every access, so there is nothing to invalidate and the
//! visible result always matches a naive recompute.

use roster_core::{Athlete, Contract, Organization};

/// A visibility predicate over one entity kind
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Build the default show-all predicate
pub fn show_all<T>() -> Predicate<T> {
    Box::new(|_: &T| true)
}

/// One active predicate per entity kind
pub struct FilterState {
    athletes: Predicate<Athlete>,
    organizations: Predicate<Organization>,
    contracts: Predicate<Contract>,
}

impl FilterState {
    /// All three kinds visible
    pub fn new() -> Self {
        FilterState {
            athletes: show_all(),
            organizations: show_all(),
            contracts: show_all(),
        }
    }

    /// Replace the athlete predicate
    pub fn set_athletes(&mut self, predicate: Predicate<Athlete>) {
        self.athletes = predicate;
    }

    /// Replace the organization predicate
    pub fn set_organizations(&mut self, predicate: Predicate<Organization>) {
        self.organizations = predicate;
    }

    /// Replace the contract predicate
    pub fn set_contracts(&mut self, predicate: Predicate<Contract>) {
        self.contracts = predicate;
    }

    /// Reset the athlete predicate to show-all
    pub fn reset_athletes(&mut self) {
        self.athletes = show_all();
    }

    /// Reset the organization predicate to show-all
    pub fn reset_organizations(&mut self) {
        self.organizations = show_all();
    }

    /// Reset the contract predicate to show-all
    pub fn reset_contracts(&mut self) {
        self.contracts = show_all();
    }

    /// Reset all three predicates to show-all
    pub fn reset_all(&mut self) {
        self.reset_athletes();
        self.reset_organizations();
        self.reset_contracts();
    }

    /// Test an athlete against the active predicate
    pub fn admits_athlete(&self, athlete: &Athlete) -> bool {
        (self.athletes)(athlete)
    }

    /// Test an organization against the active predicate
    pub fn admits_organization(&self, organization: &Organization) -> bool {
        (self.organizations)(organization)
    }

    /// Test a contract against the active predicate
    pub fn admits_contract(&self, contract: &Contract) -> bool {
        (self.contracts)(contract)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Predicates are opaque closures
        f.debug_struct("FilterState").finish_non_exhaustive()
    }
}
