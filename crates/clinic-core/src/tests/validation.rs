use crate::{
    Appointment, FormMode, Gender, Patient, is_valid_email, is_valid_phone, validate_appointment,
    validate_patient,
};

use chrono::{Duration, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

fn valid_patient() -> Patient {
    Patient::new("Jane Doe", 34, Gender::Female, "+1 (555) 010-2000")
}

// =========================================================================
// Patient
// =========================================================================

#[test]
fn given_valid_patient_when_validated_then_ok() {
    let patient = valid_patient().with_email("jane@example.com");
    assert_that!(validate_patient(&patient), ok(anything()));
}

#[test]
fn given_blank_name_when_validated_then_name_required() {
    let mut patient = valid_patient();
    patient.name = "   ".to_string();

    let error = validate_patient(&patient).unwrap_err();
    let errors = error.field_errors().unwrap();

    assert_that!(errors.get("name"), some(eq("Name is required")));
    assert_that!(errors.len(), eq(1));
}

#[test]
fn given_age_out_of_range_when_validated_then_age_error() {
    for age in [0, -3, 151] {
        let mut patient = valid_patient();
        patient.age = age;

        let error = validate_patient(&patient).unwrap_err();
        assert_that!(
            error.field_errors().unwrap().get("age"),
            some(eq("Age must be between 1 and 150"))
        );
    }

    let mut patient = valid_patient();
    patient.age = 150;
    assert_that!(validate_patient(&patient), ok(anything()));
}

#[test]
fn given_bad_phone_and_email_when_validated_then_reports_both() {
    let mut patient = valid_patient().with_email("not-an-email");
    patient.phone = "555-CALL".to_string();

    let error = validate_patient(&patient).unwrap_err();
    let errors = error.field_errors().unwrap();

    assert_that!(errors.get("phone"), some(eq("Invalid phone number format")));
    assert_that!(errors.get("email"), some(eq("Invalid email format")));
    assert!(error.to_string().contains("phone: Invalid phone number format"));
}

#[test]
fn given_empty_phone_when_validated_then_phone_required() {
    let mut patient = valid_patient();
    patient.phone = String::new();

    let error = validate_patient(&patient).unwrap_err();
    assert_that!(
        error.field_errors().unwrap().get("phone"),
        some(eq("Phone is required"))
    );
}

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@clinic.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.b"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.de"));
}

#[test]
fn test_phone_shapes() {
    assert!(is_valid_phone("+44 (0) 20-7946-0000"));
    assert!(!is_valid_phone(""));
    assert!(!is_valid_phone("555.0100"));
}

// =========================================================================
// Appointment
// =========================================================================

#[test]
fn given_future_appointment_when_created_then_ok() {
    let now = Utc::now();
    let appointment = Appointment::new(1, "Dr. Grey", now + Duration::hours(2));

    assert_that!(
        validate_appointment(&appointment, FormMode::Create, now),
        ok(anything())
    );
}

#[test]
fn given_past_date_when_created_then_date_error() {
    let now = Utc::now();
    let appointment = Appointment::new(1, "Dr. Grey", now - Duration::minutes(1));

    let error = validate_appointment(&appointment, FormMode::Create, now).unwrap_err();
    assert_that!(
        error.field_errors().unwrap().get("date"),
        some(eq("Appointment date cannot be in the past"))
    );
}

#[test]
fn given_past_date_when_updated_then_ok() {
    let now = Utc::now();
    let appointment = Appointment::new(1, "Dr. Grey", now - Duration::days(3));

    assert_that!(
        validate_appointment(&appointment, FormMode::Update, now),
        ok(anything())
    );
}

#[test]
fn given_missing_patient_and_doctor_when_validated_then_both_reported() {
    let now = Utc::now();
    let appointment = Appointment::new(0, " ", now + Duration::days(1));

    let result = validate_appointment(&appointment, FormMode::Create, now);
    assert_that!(result, err(anything()));

    let error = result.unwrap_err();
    let errors = error.field_errors().unwrap();
    assert_that!(errors.get("patientId"), some(eq("Please select a patient")));
    assert_that!(errors.get("doctor"), some(eq("Doctor name is required")));
}
