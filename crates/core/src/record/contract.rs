//! Contract record
//!
//! A contract binds an athlete to an organization for a sport over a
//! date range at an amount. The record embeds full copies of the athlete
//! and organization rather than references; both are immutable, so the
//! copies cannot drift, and a contract stays intact even after its
//! athlete or organization row is deleted from the store (that is a
//! deliberate product behavior, not an oversight).
//!
//! Weak identity is built from the *weak* identities of the embedded
//! records plus every own field: two contracts are the same contract if
//! they bind the same athlete (by name+sport) to the same organization
//! (by name+contact) for the same sport, dates, and amount. Strong
//! equality is deep equality on everything.

use crate::field::{Amount, Date8, Sport};
use crate::record::{Athlete, Organization};
use crate::traits::WeakIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contract record binding an athlete to an organization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    athlete: Athlete,
    sport: Sport,
    organization: Organization,
    #[serde(rename = "startDate")]
    start_date: Date8,
    #[serde(rename = "endDate")]
    end_date: Date8,
    amount: Amount,
}

impl Contract {
    /// Assemble a contract from already-validated parts
    pub fn new(
        athlete: Athlete,
        sport: Sport,
        organization: Organization,
        start_date: Date8,
        end_date: Date8,
        amount: Amount,
    ) -> Self {
        Contract {
            athlete,
            sport,
            organization,
            start_date,
            end_date,
            amount,
        }
    }

    /// The contracted athlete (embedded full record)
    pub fn athlete(&self) -> &Athlete {
        &self.athlete
    }

    /// The sport the contract covers
    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    /// The contracting organization (embedded full record)
    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    /// First day of the contract
    pub fn start_date(&self) -> &Date8 {
        &self.start_date
    }

    /// Last day of the contract
    pub fn end_date(&self) -> &Date8 {
        &self.end_date
    }

    /// The contract amount
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl WeakIdentity for Contract {
    fn is_same(&self, other: &Self) -> bool {
        self.athlete.is_same(&other.athlete)
            && self.sport == other.sport
            && self.organization.is_same(&other.organization)
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.amount == other.amount
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Sport: {}; Organization: {}; Start: {}; End: {}; Amount: {}",
            self.athlete.name(),
            self.sport,
            self.organization.name(),
            self.start_date,
            self.end_date,
            self.amount
        )
    }
}
