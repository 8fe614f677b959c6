//! Sport field
//!
//! Used both on athlete profiles and on contracts. Letters and spaces
//! only, 1-50 characters, case-insensitive identity ("Tennis" and
//! "tennis" are the same sport).

use crate::error::{Error, Result};
use crate::field::{collapse_whitespace, impl_folded_eq, impl_string_serde};
use std::fmt;

/// Maximum length of a sport, in characters
pub const MAX_SPORT_LENGTH: usize = 50;

/// A sport discipline
#[derive(Debug, Clone)]
pub struct Sport(String);

impl Sport {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str =
        "sports should only contain letters and spaces, and be 1-50 characters long";

    /// Create a new Sport, normalizing and validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the normalized input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let normalized = collapse_whitespace(&raw.into());
        if !Self::check(&normalized) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(Sport(normalized))
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        Self::check(&collapse_whitespace(raw))
    }

    fn check(s: &str) -> bool {
        !s.is_empty()
            && s.chars().count() <= MAX_SPORT_LENGTH
            && s.chars().all(|c| c.is_alphabetic() || c == ' ')
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

impl_folded_eq!(Sport);
impl_string_serde!(Sport);

impl AsRef<str> for Sport {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sport {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Sport::new(value)
    }
}

impl TryFrom<&str> for Sport {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Sport::new(value)
    }
}
