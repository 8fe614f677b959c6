//! Organization-side field types
//!
//! Organizations carry their own field newtypes even where the rule is
//! shared with the athlete side (`OrgPhone`, `OrgEmail`): a contact phone
//! is not interchangeable with an athlete's phone at the type level, only
//! the validation rule is shared.
//!
//! ## Validation
//!
//! - `OrgName`: alphanumerics, spaces, apostrophes, hyphens and
//!   ampersands; starts alphanumeric; at most 50 characters
//! - `ContactName`: same rule as athlete [`Name`](crate::field::Name)
//! - `OrgPhone` / `OrgEmail`: same rules as [`Phone`](crate::field::Phone)
//!   and [`Email`](crate::field::Email)

use crate::error::{Error, Result};
use crate::field::email::is_valid_email;
use crate::field::name::is_valid_person_name;
use crate::field::phone::is_valid_phone;
use crate::field::{collapse_whitespace, impl_folded_eq, impl_string_serde};
use std::fmt;

/// Maximum length of an organization name, in characters
pub const MAX_ORG_NAME_LENGTH: usize = 50;

/// An organization's name
///
/// Case-insensitive identity: "Acme Sports" and "ACME sports" are the
/// same organization name.
#[derive(Debug, Clone)]
pub struct OrgName(String);

impl OrgName {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "organization names should only contain alphanumerics, \
         spaces, apostrophes, hyphens and ampersands, start with an alphanumeric character, and \
         be at most 50 characters long";

    /// Create a new OrgName, normalizing and validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the normalized input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let normalized = collapse_whitespace(&raw.into());
        if !Self::check(&normalized) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(OrgName(normalized))
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        Self::check(&collapse_whitespace(raw))
    }

    fn check(s: &str) -> bool {
        let mut chars = s.chars();
        let starts_alphanumeric = chars.next().is_some_and(|c| c.is_alphanumeric());
        starts_alphanumeric
            && s.chars().count() <= MAX_ORG_NAME_LENGTH
            && s.chars()
                .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '\'' | '-' | '&'))
    }

    /// Get the canonical form as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_folded_eq!(OrgName);
impl_string_serde!(OrgName);

/// An organization's contact person name
///
/// Same rule and case-insensitive identity as an athlete name.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "contact names should only contain letters, spaces, \
         apostrophes and hyphens, start with a letter, and be at most 50 characters long";

    /// Create a new ContactName, normalizing and validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the normalized input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let normalized = collapse_whitespace(&raw.into());
        if !is_valid_person_name(&normalized) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(ContactName(normalized))
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
}

impl_folded_eq!(ContactName);
impl_string_serde!(ContactName);

/// An organization's phone number (same rule as athlete phones)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgPhone(String);

impl OrgPhone {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str =
        "organization phone numbers should be exactly 8 digits and start with 6, 8 or 9";

    /// Create a new OrgPhone, validating the input
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
        Ok(OrgPhone(trimmed.to_string()))
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

impl_string_serde!(OrgPhone);

/// An organization's email address (same rule as athlete emails)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgEmail(String);

impl OrgEmail {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "organization emails should be of the form \
         local-part@domain, where the local-part contains only alphanumerics and +_.- (not at \
         the ends), and the domain is made of alphanumeric labels separated by periods, ending \
         with a label of at least 2 characters";

    /// Create a new OrgEmail, validating the input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the input breaks the rule.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !is_valid_email(trimmed) {
            return Err(Error::Validation(Self::MESSAGE));
        }
        Ok(OrgEmail(trimmed.to_string()))
    }

    /// Check whether a raw string would construct successfully
    pub fn is_valid(raw: &str) -> bool {
        is_valid_email(raw.trim())
    }

    /// Get the canonical form as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_string_serde!(OrgEmail);

macro_rules! impl_display_and_tryfrom {
    ($ty:ident) => {
        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self> {
                $ty::new(value)
            }
        }
    };
}

impl_display_and_tryfrom!(OrgName);
impl_display_and_tryfrom!(ContactName);
impl_display_and_tryfrom!(OrgPhone);
impl_display_and_tryfrom!(OrgEmail);
