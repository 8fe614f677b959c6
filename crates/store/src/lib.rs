//! In-memory store for the roster records system
//!
//! This crate provides:
//! - `UniqueList<T>`: the insertion-ordered, weak-identity-unique
//!   collection backing every entity kind
//! - `FilterState`: one explicit visibility predicate per kind
//! - `Roster`: the aggregate store composing the three collections,
//!   filtered views, and snapshot replace
//!
//! Everything is single-threaded and synchronous: one command runs to
//! completion before the next is accepted, so there is no locking here.
//! A multi-session embedding needs its own discipline (one `Roster` per
//! session, or a mutex around it).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod roster;
pub mod unique_list;

pub use filter::{show_all, FilterState, Predicate};
pub use roster::{Roster, RosterSnapshot};
pub use unique_list::UniqueList;
