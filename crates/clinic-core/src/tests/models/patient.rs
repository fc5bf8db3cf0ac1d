use crate::{Entity, Gender, Patient};

use serde_json::json;

#[test]
fn given_backend_row_when_deserialize_then_ignores_extra_fields() {
    let value = json!({
        "id": 1,
        "name": "Jane Doe",
        "age": 34,
        "gender": "Female",
        "phone": "+1 (555) 010-2000",
        "email": "jane@example.com",
        "roomId": 4,
        "createdAt": "2026-01-01T09:00:00Z"
    });

    let patient: Patient = serde_json::from_value(value).unwrap();

    assert_eq!(patient.id, Some(1));
    assert_eq!(patient.name, "Jane Doe");
    assert_eq!(patient.gender, Gender::Female);
    assert_eq!(patient.email.as_deref(), Some("jane@example.com"));
    assert!(patient.address.is_none());
}

#[test]
fn given_blank_optional_strings_when_deserialize_then_none() {
    let value = json!({
        "id": 2,
        "name": "John",
        "age": 50,
        "gender": "Male",
        "phone": "555",
        "email": "",
        "address": "   "
    });

    let patient: Patient = serde_json::from_value(value).unwrap();

    assert!(patient.email.is_none());
    assert!(patient.address.is_none());
}

#[test]
fn given_unsaved_patient_when_serialize_then_omits_id_and_empty_optionals() {
    let patient = Patient::new("Ann", 40, Gender::Other, "123");

    let value = serde_json::to_value(&patient).unwrap();

    assert!(value.get("id").is_none());
    assert!(value.get("email").is_none());
    assert!(value.get("address").is_none());
    assert_eq!(value["gender"], "Other");
    assert!(!patient.is_persisted());
}

#[test]
fn test_patient_member_path() {
    assert_eq!(Patient::COLLECTION, "/api/patients");
    assert_eq!(Patient::member_path(5), "/api/patients/5");
}
