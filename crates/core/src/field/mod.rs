//! Self-validating field value types
//!
//! Every field a record is built from is a newtype over its canonical
//! string or numeric form, validated at construction:
//!
//! - `new()` trims, collapses internal whitespace (free-text fields only),
//!   validates, and fails with [`Error::Validation`] carrying the type's
//!   fixed `MESSAGE` constraint text.
//! - `is_valid()` is the same predicate, usable without constructing.
//! - `Display`/`as_str()` expose the canonical form, which is also the
//!   serde wire form (all fields persist as strings).
//!
//! Free-text fields (`Name`, `Sport`, `OrgName`, `ContactName`) compare and
//! hash case-insensitively on the normalized string; everything else
//! compares case-sensitively on the canonical form.
//!
//! [`Error::Validation`]: crate::error::Error::Validation

pub mod age;
pub mod amount;
pub mod date;
pub mod email;
pub mod name;
pub mod organization;
pub mod phone;
pub mod sport;

pub use age::Age;
pub use amount::Amount;
pub use date::Date8;
pub use email::Email;
pub use name::Name;
pub use organization::{ContactName, OrgEmail, OrgName, OrgPhone};
pub use phone::Phone;
pub use sport::Sport;

/// Trim and collapse runs of whitespace to single spaces
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-fold for case-insensitive comparison and hashing
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Serialize as the canonical string; deserialize through the validating
/// constructor so a loaded snapshot can never contain an invalid field.
macro_rules! impl_string_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                $ty::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Equality and hashing on the case-folded canonical string
macro_rules! impl_folded_eq {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                crate::field::fold(self.as_str()) == crate::field::fold(other.as_str())
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                crate::field::fold(self.as_str()).hash(state);
            }
        }
    };
}

pub(crate) use impl_folded_eq;
pub(crate) use impl_string_serde;
