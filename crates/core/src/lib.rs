//! Core types for the roster records store
//!
//! This crate defines the foundational types used throughout the system:
//! - Field value types: Name, Sport, Age, Phone, Email, OrgName,
//!   ContactName, OrgPhone, OrgEmail, Date8, Amount
//! - Entity records: Athlete, Organization, Contract
//! - EntityKind: discriminates the three record kinds
//! - WeakIdentity: the duplicate-detection identity trait
//! - Error: error type hierarchy (Validation, Duplicate, NotFound)
//!
//! Everything here is a plain immutable value: no I/O, no logging, no
//! interior mutability. Collections and filtering live in `roster-store`;
//! search dispatch lives in `roster-search`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod record;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use field::{
    Age, Amount, ContactName, Date8, Email, Name, OrgEmail, OrgName, OrgPhone, Phone, Sport,
};
pub use record::{Athlete, Contract, Organization};
pub use traits::WeakIdentity;
pub use types::EntityKind;
