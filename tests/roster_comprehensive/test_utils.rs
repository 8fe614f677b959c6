//! Test utilities for the roster comprehensive suite

use rosterdb::{
    Age, Amount, Athlete, ContactName, Contract, Date8, Email, Name, OrgEmail, OrgName, OrgPhone,
    Organization, Phone, Sport,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once so store/search trace events show up
/// when running with `--nocapture`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Build an athlete with the given identity fields and default contact details
pub fn athlete(name: &str, sport: &str) -> Athlete {
    athlete_with_phone(name, sport, "91234567")
}

/// Build an athlete with an explicit phone, for weak-vs-strong cases
pub fn athlete_with_phone(name: &str, sport: &str, phone: &str) -> Athlete {
    Athlete::new(
        Name::new(name).expect("valid name"),
        Sport::new(sport).expect("valid sport"),
        Age::new("21").expect("valid age"),
        Phone::new(phone).expect("valid phone"),
        Email::new("athlete@example.com").expect("valid email"),
    )
}

/// Build an organization with the given name and a default contact
pub fn org(name: &str) -> Organization {
    org_with_contact(name, "Jane Lee")
}

/// Build an organization with an explicit contact name
pub fn org_with_contact(name: &str, contact: &str) -> Organization {
    Organization::new(
        OrgName::new(name).expect("valid org name"),
        ContactName::new(contact).expect("valid contact name"),
        OrgPhone::new("61234567").expect("valid org phone"),
        OrgEmail::new("contact@example.com").expect("valid org email"),
    )
}

/// Build a contract over the given parties and sport with fixed terms
pub fn contract(a: Athlete, o: Organization, sport: &str) -> Contract {
    contract_with_amount(a, o, sport, "50000")
}

/// Build a contract with an explicit amount
pub fn contract_with_amount(a: Athlete, o: Organization, sport: &str, amount: &str) -> Contract {
    Contract::new(
        a,
        Sport::new(sport).expect("valid sport"),
        o,
        Date8::new("01012025").expect("valid start date"),
        Date8::new("31122025").expect("valid end date"),
        Amount::new(amount).expect("valid amount"),
    )
}
