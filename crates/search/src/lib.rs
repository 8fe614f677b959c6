//! Search dispatch for the roster records store
//!
//! This crate provides:
//! - `SearchScope`: the closed set of six (entity kind, field) pairs a
//!   query can target
//! - `find`: install a case-insensitive substring filter on one kind
//!   and reset the other two
//! - `refresh`: reset all three filters to show-all
//! - `SearchOutcome`: match count plus which view to surface
//!
//! The invariant maintained here: after any `find`, at most one entity
//! kind is under active search-filtering.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod scope;

pub use dispatch::{find, refresh, SearchOutcome};
pub use scope::SearchScope;
