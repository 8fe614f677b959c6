//! Contract date field
//!
//! ## Validation
//!
//! Exactly 8 digits, DDMMYYYY, and the digits must name a real calendar
//! date: "31022025" (31 February) fails, "29022024" (leap day) passes.
//! No overflow or wrap-around is tolerated.
//!
//! The canonical form is the original 8-digit string; the parsed
//! `NaiveDate` is kept alongside it for callers that need calendar
//! arithmetic.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Required length of a date string
pub const DATE_LENGTH: usize = 8;

/// A contract date in DDMMYYYY form
#[derive(Debug, Clone)]
pub struct Date8 {
    text: String,
    date: NaiveDate,
}

impl Date8 {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str =
        "dates should be exactly 8 digits in DDMMYYYY form and name a real calendar date";

    /// Create a new Date8, validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the input is not a real DDMMYYYY date.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        let date = Self::parse(trimmed).ok_or(Error::Validation(Self::MESSAGE))?;
        Ok(Date8 {
            text: trimmed.to_string(),
            date,
        })
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw.trim()).is_some()
    }

    fn parse(s: &str) -> Option<NaiveDate> {
        if s.len() != DATE_LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let day: u32 = s[0..2].parse().ok()?;
        let month: u32 = s[2..4].parse().ok()?;
        let year: i32 = s[4..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Get the canonical 8-digit form as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Identity is the canonical digit string; the NaiveDate is derived data.
impl PartialEq for Date8 {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Date8 {}

impl Hash for Date8 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Date8 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date8 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date.cmp(&other.date)
    }
}

impl AsRef<str> for Date8 {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Date8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<&str> for Date8 {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Date8::new(value)
    }
}

impl Serialize for Date8 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Date8 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Date8::new(raw).map_err(serde::de::Error::custom)
    }
}
