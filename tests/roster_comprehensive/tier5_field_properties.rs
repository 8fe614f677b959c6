//! Tier 5: Field Properties
//!
//! Property-based checks over the field validators and equality rules.

use proptest::prelude::*;
use rosterdb::{Amount, Date8, Name, Phone, Sport};

proptest! {
    /// Any valid name equals itself under arbitrary case flips
    #[test]
    fn prop_name_equality_ignores_case(raw in "[A-Za-z][A-Za-z' -]{0,30}[A-Za-z]") {
        prop_assume!(Name::is_valid(&raw));
        let original = Name::new(raw.clone()).unwrap();
        let upper = Name::new(raw.to_uppercase());
        let lower = Name::new(raw.to_lowercase());
        prop_assume!(upper.is_ok() && lower.is_ok());
        prop_assert_eq!(&original, &upper.unwrap());
        prop_assert_eq!(&original, &lower.unwrap());
    }

    /// The validator never panics, whatever the input
    #[test]
    fn prop_validators_total(raw in ".*") {
        let _ = Name::is_valid(&raw);
        let _ = Sport::is_valid(&raw);
        let _ = Phone::is_valid(&raw);
        let _ = Date8::is_valid(&raw);
        let _ = Amount::is_valid(&raw);
    }

    /// Valid phones are exactly the 8-digit strings with a 6/8/9 prefix
    #[test]
    fn prop_phone_shape(raw in "[689][0-9]{7}") {
        prop_assert!(Phone::is_valid(&raw));
        let longer = format!("{raw}0");
        prop_assert!(!Phone::is_valid(&longer));
        prop_assert!(!Phone::is_valid(&raw[1..]));
    }

    /// Construction and canonical form round-trip for amounts
    #[test]
    fn prop_amount_roundtrip(value in 1u64..=u64::MAX) {
        let amount = Amount::new(value.to_string()).unwrap();
        prop_assert_eq!(amount.value(), value);
        prop_assert_eq!(amount.to_string(), value.to_string());
    }

    /// Date validation agrees with the calendar
    #[test]
    fn prop_date_agrees_with_calendar(
        day in 1u32..=31,
        month in 1u32..=12,
        year in 1000i32..=9999,
    ) {
        let raw = format!("{day:02}{month:02}{year:04}");
        let expected = chrono::NaiveDate::from_ymd_opt(year, month, day).is_some();
        prop_assert_eq!(Date8::is_valid(&raw), expected);
    }
}

#[test]
fn test_feb_31_and_leap_day_pinned() {
    assert!(!Date8::is_valid("31022025"));
    assert!(Date8::is_valid("29022024"));
}
