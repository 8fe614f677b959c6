//! Core trait definitions
//!
//! The store distinguishes two notions of sameness:
//!
//! - **Weak identity** (`WeakIdentity::is_same`): "is this the same
//!   real-world entity?" — the subset of fields used for duplicate
//!   detection and lookup. Two athletes with the same name and sport are
//!   the same athlete even if their phone numbers differ.
//! - **Strong equality** (`PartialEq`): full field-by-field equality,
//!   used only for removal matching.
//!
//! Weak identity is deliberately coarser than strong equality: every pair
//! of strongly equal values must also be weakly the same, never the
//! reverse.

/// Weak-identity comparison for entity records
pub trait WeakIdentity {
    /// True if `other` refers to the same real-world entity as `self`,
    /// ignoring non-identity fields.
    fn is_same(&self, other: &Self) -> bool;
}
