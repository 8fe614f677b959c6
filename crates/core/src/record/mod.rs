//! Entity records
//!
//! The three record kinds the store manages: [`Athlete`],
//! [`Organization`], and [`Contract`]. Records are immutable once
//! constructed; an edit is modeled as a delete followed by an add of the
//! replacement value.
//!
//! Each record implements:
//! - [`WeakIdentity`](crate::traits::WeakIdentity) — duplicate detection
//! - `PartialEq` — strong (full field) equality, used for removal
//! - `Display` — the fixed-order rendering used in feedback messages
//! - serde with the persisted field names (nested full records on
//!   contracts, all numerics and dates as strings)

pub mod athlete;
pub mod contract;
pub mod organization;

pub use athlete::Athlete;
pub use contract::Contract;
pub use organization::Organization;
