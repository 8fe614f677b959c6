//! Phone number field
//!
//! ## Validation
//!
//! Phone numbers must be exactly 8 digits and start with 6, 8 or 9
//! (local mobile/landline prefixes). Compared case-sensitively (digits
//! only, so folding would be a no-op anyway).

use crate::error::{Error, Result};
use crate::field::impl_string_serde;
use std::fmt;

/// Required length of a phone number
pub const PHONE_LENGTH: usize = 8;

/// An athlete's phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str =
        "phone numbers should be exactly 8 digits and start with 6, 8 or 9";

    /// Create a new Phone, validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !is_valid_phone(trimmed) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(Phone(trimmed.to_string()))
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        is_valid_phone(raw.trim())
    }

    /// Get the canonical form as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shared rule for phone numbers (athlete and organization)
pub(crate) fn is_valid_phone(s: &str) -> bool {
    s.len() == PHONE_LENGTH
        && s.bytes().all(|b| b.is_ascii_digit())
        && matches!(s.as_bytes()[0], b'6' | b'8' | b'9')
}

impl_string_serde!(Phone);

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Phone {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Phone::new(value)
    }
}
