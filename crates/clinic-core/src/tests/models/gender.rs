use crate::{AppointmentStatus, Gender};

use std::str::FromStr;

#[test]
fn test_gender_from_str_is_case_insensitive() {
    assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("FEMALE").unwrap(), Gender::Female);
    assert_eq!(Gender::from_str(" Other ").unwrap(), Gender::Other);
    assert!(Gender::from_str("unknown").is_err());
}

#[test]
fn given_unknown_wire_gender_when_deserialize_then_other() {
    let gender: Gender = serde_json::from_str("\"Nonbinary\"").unwrap();
    assert_eq!(gender, Gender::Other);
}

#[test]
fn test_gender_display_matches_wire_value() {
    assert_eq!(Gender::Female.to_string(), "Female");
    assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"Male\"");
}

#[test]
fn test_appointment_status_from_str() {
    assert_eq!(
        AppointmentStatus::from_str("canceled").unwrap(),
        AppointmentStatus::Cancelled
    );
    assert!(AppointmentStatus::from_str("later").is_err());
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
}
