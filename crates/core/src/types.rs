//! Foundational discriminant types
//!
//! `EntityKind` discriminates between the three record kinds the store
//! manages. It shows up in errors ("duplicate athlete"), in filter state
//! (one predicate per kind), and in search outcomes (which kind's view the
//! presentation layer should surface).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three record kinds held by the aggregate store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Athlete profile records
    Athlete,
    /// Organization records
    Organization,
    /// Contract records binding an athlete to an organization
    Contract,
}

impl EntityKind {
    /// All kinds, in the store's canonical order
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Athlete,
        EntityKind::Organization,
        EntityKind::Contract,
    ];

    /// Lowercase singular name, used in error and feedback messages
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Athlete => "athlete",
            EntityKind::Organization => "organization",
            EntityKind::Contract => "contract",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
