//! Athlete name field
//!
//! ## Validation
//!
//! Names must:
//! - Be 1-50 characters after normalization
//! - Contain only letters, spaces, apostrophes, and hyphens
//! - Start with a letter
//!
//! The same rule backs [`ContactName`](crate::field::ContactName).

use crate::error::{Error, Result};
use crate::field::{collapse_whitespace, impl_folded_eq, impl_string_serde};
use std::fmt;

/// Maximum length of a name, in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// An athlete's name
///
/// Stored in normalized form (trimmed, internal whitespace collapsed).
/// Equality and hashing are case-insensitive: `"alice tan"` and
/// `"Alice Tan"` are the same name.
#[derive(Debug, Clone)]
pub struct Name(String);

impl Name {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "names should only contain letters, spaces, apostrophes \
         and hyphens, start with a letter, and be at most 50 characters long";

    /// Create a new Name, normalizing and validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the normalized input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let normalized = collapse_whitespace(&raw.into());
        if !is_valid_person_name(&normalized) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(Name(normalized))
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        is_valid_person_name(&collapse_whitespace(raw))
    }

    /// Get the canonical form as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Shared rule for person-style names (athlete names, organization contacts)
pub(crate) fn is_valid_person_name(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_alphabetic());
    starts_with_letter
        && s.chars().count() <= MAX_NAME_LENGTH
        && s.chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-')
}

impl_folded_eq!(Name);
impl_string_serde!(Name);

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Name::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Name::new(value)
    }
}
