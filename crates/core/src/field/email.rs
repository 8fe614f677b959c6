//! Email address field
//!
//! ## Validation
//!
//! `local@domain`, where:
//! - the local part is alphanumeric plus `+` `_` `.` `-`, and neither
//!   starts nor ends with one of those special characters
//! - the domain is dot-separated labels of alphanumerics and hyphens,
//!   each label starting and ending alphanumeric
//! - the final label is at least 2 characters
//!
//! Emails compare case-sensitively on the canonical (trimmed) form.

use crate::error::{Error, Result};
use crate::field::impl_string_serde;
use std::fmt;

/// An athlete's email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Fixed constraint message reported on validation failure
    pub const MESSAGE: &'static str = "emails should be of the form local-part@domain, where the \
         local-part contains only alphanumerics and +_.- (not at the ends), and the domain is \
         made of alphanumeric labels separated by periods, ending with a label of at least 2 \
         characters";

    /// Create a new Email, validating the input
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
        Ok(Email(trimmed.to_string()))
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

/// Shared rule for email addresses (athlete and organization)
pub(crate) fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-')
}

fn is_valid_local_part(local: &str) -> bool {
    let bytes = local.as_bytes();
    !local.is_empty()
        && local.chars().all(is_local_char)
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
}

fn is_valid_domain(domain: &str) -> bool {
    let mut last_len = 0;
    for label in domain.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        last_len = label.len();
    }
    last_len >= 2
}

impl_string_serde!(Email);

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Email {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Email::new(value)
    }
}
