//! Organization record
//!
//! Weak identity is (name, contact name); strong equality compares all
//! four fields.

use crate::field::{ContactName, OrgEmail, OrgName, OrgPhone};
use crate::traits::WeakIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An organization record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organization {
    name: OrgName,
    #[serde(rename = "contactName")]
    contact_name: ContactName,
    phone: OrgPhone,
    email: OrgEmail,
}

impl Organization {
    /// Assemble an organization from already-validated fields
    pub fn new(name: OrgName, contact_name: ContactName, phone: OrgPhone, email: OrgEmail) -> Self {
        Organization {
            name,
            contact_name,
            phone,
            email,
        }
    }

    /// The organization's name
    pub fn name(&self) -> &OrgName {
        &self.name
    }

    /// The contact person's name
    pub fn contact_name(&self) -> &ContactName {
        &self.contact_name
    }

    /// The organization's phone number
    pub fn phone(&self) -> &OrgPhone {
        &self.phone
    }

    /// The organization's email address
    pub fn email(&self) -> &OrgEmail {
        &self.email
    }
}

impl WeakIdentity for Organization {
    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && self.contact_name == other.contact_name
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Contact: {}; Phone: {}; Email: {}",
            self.name, self.contact_name, self.phone, self.email
        )
    }
}
