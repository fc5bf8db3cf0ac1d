use crate::{Appointment, AppointmentStatus, Entity};

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn given_camel_case_patient_id_when_deserialize_then_maps_to_patient_id() {
    let value = json!({
        "id": 9,
        "patientId": 3,
        "doctor": "Dr. House",
        "date": "2026-11-02T14:30:00Z",
        "notes": "Follow-up",
        "status": "Completed"
    });

    let appointment: Appointment = serde_json::from_value(value).unwrap();

    assert_eq!(appointment.patient_id, 3);
    assert_eq!(
        appointment.date,
        Utc.with_ymd_and_hms(2026, 11, 2, 14, 30, 0).unwrap()
    );
    assert_eq!(appointment.status(), AppointmentStatus::Completed);
}

#[test]
fn given_unknown_status_when_deserialize_then_scheduled() {
    let value = json!({
        "patientId": 3,
        "doctor": "Dr. Who",
        "date": "2026-11-02T14:30:00Z",
        "status": "Rescheduled"
    });

    let appointment: Appointment = serde_json::from_value(value).unwrap();

    assert_eq!(appointment.status, Some(AppointmentStatus::Scheduled));
}

#[test]
fn given_new_appointment_when_serialize_then_uses_wire_names() {
    let date = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();
    let appointment = Appointment::new(7, "Dr. Grey", date).with_notes("Fasting");

    let value = serde_json::to_value(&appointment).unwrap();

    assert_eq!(value["patientId"], 7);
    assert_eq!(value["doctor"], "Dr. Grey");
    assert_eq!(value["date"], "2030-01-01T08:00:00Z");
    assert_eq!(value["notes"], "Fasting");
    assert!(value.get("id").is_none());
    assert!(value.get("status").is_none());
}

#[test]
fn test_appointment_member_path() {
    assert_eq!(Appointment::member_path(12), "/api/appointments/12");
}
