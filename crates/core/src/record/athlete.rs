//! Athlete record
//!
//! Weak identity is (name, sport): the same person can appear once per
//! sport, and two entries with the same name and sport are the same
//! athlete no matter what their contact details say. Strong equality
//! compares all five fields (still case-insensitive on name and sport,
//! which is inherited from the field types).

use crate::field::{Age, Email, Name, Phone, Sport};
use crate::traits::WeakIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An athlete profile record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Athlete {
    name: Name,
    sport: Sport,
    age: Age,
    phone: Phone,
    email: Email,
}

impl Athlete {
    /// Assemble an athlete from already-validated fields
    pub fn new(name: Name, sport: Sport, age: Age, phone: Phone, email: Email) -> Self {
        Athlete {
            name,
            sport,
            age,
            phone,
            email,
        }
    }

    /// The athlete's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The sport this profile is registered under
    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    /// The athlete's age
    pub fn age(&self) -> Age {
        self.age
    }

    /// The athlete's phone number
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The athlete's email address
    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl WeakIdentity for Athlete {
    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && self.sport == other.sport
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Sport: {}; Age: {}; Phone: {}; Email: {}",
            self.name, self.sport, self.age, self.phone, self.email
        )
    }
}
