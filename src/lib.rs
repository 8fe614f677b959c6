//! rosterdb - embedded records store for athlete, organization, and
//! contract rosters
//!
//! rosterdb tracks three related record kinds - athletes, organizations,
//! and the contracts binding one to the other - with validated field
//! types, weak-identity uniqueness, filtered views, and keyword search
//! over a closed set of scopes.
//!
//! # Quick Start
//!
//! ```
//! use rosterdb::{Athlete, Name, Sport, Age, Phone, Email, SearchScope, Session};
//!
//! # fn main() -> rosterdb::Result<()> {
//! let mut session = Session::new();
//!
//! session.add_athlete(Athlete::new(
//!     Name::new("Alice Tan")?,
//!     Sport::new("Tennis")?,
//!     Age::new("21")?,
//!     Phone::new("91234567")?,
//!     Email::new("alice@example.com")?,
//! ))?;
//!
//! let outcome = session.find(SearchScope::AthleteName, "ali")?;
//! assert_eq!(session.roster().filtered_athletes().len(), 1);
//! assert!(outcome.feedback.contains("1 match(es)"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The heavy lifting lives in the member crates; this crate is the
//! facade plus the [`Session`] command surface:
//!
//! - `roster-core`: field value types, entity records, errors
//! - `roster-store`: unique collections, the aggregate store, filters
//! - `roster-search`: the six search scopes and dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]

mod session;

pub use session::{CommandOutcome, Session};

// Re-export the public API of the member crates
pub use roster_core::{
    Age, Amount, Athlete, ContactName, Contract, Date8, Email, EntityKind, Error, Name, OrgEmail,
    OrgName, OrgPhone, Organization, Phone, Result, Sport, WeakIdentity,
};
pub use roster_search::{find, refresh, SearchOutcome, SearchScope};
pub use roster_store::{FilterState, Predicate, Roster, RosterSnapshot, UniqueList};
