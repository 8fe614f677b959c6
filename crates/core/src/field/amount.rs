//! Contract amount field
//!
//! A positive integer. Constructed from the raw decimal string; the
//! canonical form (and wire form) is the plain decimal string without
//! leading zeros.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contract amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(u64);

impl Amount {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "amounts should be a positive whole number";

    /// Create a new Amount from its raw decimal string
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the string is not a positive
    /// whole number.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        Self::parse(raw.as_ref()).ok_or(Error::Validation(Self::MESSAGE))
    }

    /// Create an Amount directly from a positive value
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the value is zero.
    pub fn from_value(value: u64) -> Result<Self> {
        if value > 0 {
            Ok(Amount(value))
        } else {
            Err(Error::Validation(Self::MESSAGE))
        }
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    fn parse(raw: &str) -> Option<Amount> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u64 = raw.parse().ok()?;
        (value > 0).then_some(Amount(value))
    }

    /// The numeric value
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Amount {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Amount::new(value)
    }
}

// Persists as decimal digits, like every other field.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Amount::new(raw).map_err(serde::de::Error::custom)
    }
}
