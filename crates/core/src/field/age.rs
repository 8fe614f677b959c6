//! Age field
//!
//! A small positive integer in 1-120. Constructed from the raw decimal
//! string the parser hands over; leading zeros are normalized away
//! ("021" becomes "21"). The canonical form is the plain decimal string.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum valid age
pub const MIN_AGE: u8 = 1;
/// Maximum valid age
pub const MAX_AGE: u8 = 120;

/// An athlete's age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "age should be a whole number between 1 and 120";

    /// Create a new Age from its raw decimal string
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the string is not a decimal number
    /// in the valid range.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        Self::parse(raw.as_ref()).ok_or(Error::Validation(Self::MESSAGE))
    }

    /// Create an Age directly from a value already known to be in range
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the value is out of range.
    pub fn from_value(value: u8) -> Result<Self> {
        if (MIN_AGE..=MAX_AGE).contains(&value) {
            Ok(Age(value))
        } else {
            Err(Error::Validation(Self::MESSAGE))
        }
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    fn parse(raw: &str) -> Option<Age> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u8 = raw.parse().ok()?;
        (MIN_AGE..=MAX_AGE).contains(&value).then_some(Age(value))
    }

    /// The numeric value
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Age {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Age::new(value)
    }
}

// Persists as a string (decimal digits), like every other field.
impl Serialize for Age {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Age::new(raw).map_err(serde::de::Error::custom)
    }
}
