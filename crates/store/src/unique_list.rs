//! Uniqueness-enforcing entity collection
//!
//! `UniqueList<T>` is the one collection type backing all three entity
//! kinds. It preserves insertion order (which is also the display order)
//! and enforces uniqueness by *weak identity* on the way in.
//!
//! The asymmetry between insertion and removal is deliberate:
//!
//! - `contains` / `add` match by weak identity ("is this the same
//!   real-world entity?")
//! - `remove` matches by strong equality — the caller must name the
//!   stored element exactly, non-identity fields included
//!
//! Find by who it is, remove by what it is.
//!
//! Duplicate checks are O(n) per add and O(n²) for `set_all`. Rosters
//! are small (hundreds of entries), so linear scans beat maintaining a
//! second index; revisit if that assumption breaks.

use roster_core::{EntityKind, Error, Result, WeakIdentity};
use tracing::debug;

/// Insertion-ordered collection with weak-identity uniqueness
#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    kind: EntityKind,
    items: Vec<T>,
}

impl<T> UniqueList<T>
where
    T: WeakIdentity + PartialEq,
{
    /// Create an empty collection for the given entity kind
    ///
    /// The kind is only used to label errors and trace events.
    pub fn new(kind: EntityKind) -> Self {
        UniqueList {
            kind,
            items: Vec::new(),
        }
    }

    /// The entity kind this collection holds
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// True if any stored element is weak-identity-equal to `probe`
    pub fn contains(&self, probe: &T) -> bool {
        self.items.iter().any(|item| item.is_same(probe))
    }

    /// Append an element, rejecting weak-identity duplicates
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if an element with the same weak
    /// identity is already stored. The collection is unchanged on failure.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::Duplicate(self.kind));
        }
        self.items.push(item);
        debug!(kind = %self.kind, len = self.items.len(), "added entry");
        Ok(())
    }

    /// Remove exactly one element that is strong-equality-equal to `target`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no stored element equals `target`
    /// field-for-field. A weakly-same element with different non-identity
    /// fields does not match.
    pub fn remove(&mut self, target: &T) -> Result<()> {
        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or(Error::NotFound(self.kind))?;
        self.items.remove(position);
        debug!(kind = %self.kind, len = self.items.len(), "removed entry");
        Ok(())
    }

    /// Atomically replace the whole collection
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if any two elements of `items` are
    /// mutually weak-identity-equal. The collection is unchanged on
    /// failure.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<()> {
        for (i, a) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|b| a.is_same(b)) {
                return Err(Error::Duplicate(self.kind));
            }
        }
        self.items = items;
        debug!(kind = %self.kind, len = self.items.len(), "replaced collection");
        Ok(())
    }

    /// Replace the element weak-identity-equal to `target` with
    /// `replacement`, preserving its position
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no stored element is weakly the same as
    ///   `target`
    /// - [`Error::Duplicate`] if `replacement` is weakly the same as a
    ///   *different* stored element (replacing an element with an edited
    ///   version of itself is fine)
    pub fn set_one(&mut self, target: &T, replacement: T) -> Result<()> {
        let position = self
            .items
            .iter()
            .position(|item| item.is_same(target))
            .ok_or(Error::NotFound(self.kind))?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != position && item.is_same(&replacement));
        if collides {
            return Err(Error::Duplicate(self.kind));
        }
        self.items[position] = replacement;
        debug!(kind = %self.kind, position, "replaced entry in place");
        Ok(())
    }

    /// Read-only ordered view of the collection
    ///
    /// Mutating through the view is a compile error, so there is no
    /// runtime "unmodifiable wrapper" to bypass.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
