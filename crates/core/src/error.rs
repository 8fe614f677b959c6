//! Error types for the roster core
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error here is recoverable: the store is left in its prior valid
//! state and the caller (the command layer) decides how to report it.

use crate::types::EntityKind;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the roster core
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A raw field value failed its validation predicate.
    ///
    /// Carries the fixed constraint message of the field type that rejected
    /// the input (see the `MESSAGE` const on each field type).
    #[error("{0}")]
    Validation(&'static str),

    /// An add or replace would create two weak-identity-equal elements
    #[error("duplicate {0}: an entry with the same identity already exists")]
    Duplicate(EntityKind),

    /// A remove or replace targeted an element that is not present
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A search was issued with an empty or blank keyword
    #[error("search keyword must not be blank")]
    EmptyKeyword,
}
