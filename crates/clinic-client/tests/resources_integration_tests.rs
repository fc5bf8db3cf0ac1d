//! CRUD, login and dashboard calls against a wiremock backend

mod common;

use common::{anonymous_client, signed_in_client};

use clinic_core::{Appointment, AppointmentStatus, Gender, Patient};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, method, path},
};

#[tokio::test]
async fn test_list_patients_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ann Lee", "age": 34, "gender": "Female",
             "phone": "555-0100", "email": "ann@example.com", "address": ""}
        ])))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let patients = client.list_patients().await.unwrap();

    assert_that!(patients, len(eq(1)));
    assert_that!(patients[0].id, some(eq(1)));
    assert_that!(patients[0].gender, eq(Gender::Female));
    assert_that!(patients[0].email.as_deref(), some(eq("ann@example.com")));
    assert_that!(patients[0].address, none());
}

#[tokio::test]
async fn test_create_patient_returns_assigned_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/patients"))
        .and(body_json(json!({
            "name": "Ann Lee", "age": 34, "gender": "Female", "phone": "555-0100"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42, "name": "Ann Lee", "age": 34, "gender": "Female", "phone": "555-0100"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let draft = Patient::new("Ann Lee", 34, Gender::Female, "555-0100");
    let created = client.create_patient(&draft).await.unwrap();

    assert_that!(created.id, some(eq(42)));
    assert_that!(created.is_persisted(), eq(true));
}

#[tokio::test]
async fn test_update_patient_puts_to_member_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/patients/42"))
        .and(body_string_contains("Ann Lee-Park"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "name": "Ann Lee-Park", "age": 35, "gender": "Female", "phone": "555-0100"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let mut patient = Patient::new("Ann Lee-Park", 35, Gender::Female, "555-0100");
    patient.id = Some(42);
    let updated = client.update_patient(42, &patient).await.unwrap();

    assert_that!(updated.age, eq(35));
}

#[tokio::test]
async fn test_delete_patient_with_and_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/patients/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Patient deleted"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/patients/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");

    let first = client.delete_patient(1).await.unwrap();
    assert_that!(first.message.as_deref(), some(eq("Patient deleted")));

    let second = client.delete_patient(2).await.unwrap();
    assert_that!(second.message, none());
}

#[tokio::test]
async fn test_delete_patient_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/patients/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let err = client.delete_patient(5).await.unwrap_err();

    assert_that!(err.message(), eq("not found"));
}

#[tokio::test]
async fn test_appointment_round_trip_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/appointments"))
        .and(body_string_contains("\"patientId\":7"))
        .and(body_string_contains("2030-01-15T09:30:00Z"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "patientId": 7, "doctor": "Dr. Grey",
            "date": "2030-01-15T09:30:00Z", "status": "Scheduled"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let date = Utc.with_ymd_and_hms(2030, 1, 15, 9, 30, 0).unwrap();
    let draft = Appointment::new(7, "Dr. Grey", date);
    let created = client.create_appointment(&draft).await.unwrap();

    assert_that!(created.id, some(eq(3)));
    assert_that!(created.patient_id, eq(7));
    assert_that!(created.date, eq(date));
    assert_that!(created.status(), eq(AppointmentStatus::Scheduled));
}

#[tokio::test]
async fn test_get_appointment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/appointments/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "patientId": 7, "doctor": "Dr. Grey",
            "date": "2030-01-15T09:30:00Z", "notes": "Follow-up", "status": "Completed"
        })))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let appointment = client.get_appointment(3).await.unwrap();

    assert_that!(appointment.notes.as_deref(), some(eq("Follow-up")));
    assert_that!(appointment.status(), eq(AppointmentStatus::Completed));
}

#[tokio::test]
async fn test_login_stores_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "admin@clinic.test", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let credential = client.login("admin@clinic.test", "secret").await.unwrap();

    assert_that!(credential.expose(), eq("abc123"));
    assert_that!(client.session().is_authenticated(), eq(true));
}

#[tokio::test]
async fn test_login_rejected_leaves_session_anonymous() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let err = client.login("admin@clinic.test", "wrong").await.unwrap_err();

    assert_that!(err.message(), eq("Invalid credentials"));
    assert_that!(client.session().is_authenticated(), eq(false));
}

#[tokio::test]
async fn test_login_without_token_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let result = client.login("admin@clinic.test", "secret").await;

    assert_that!(result, err(anything()));
    assert_that!(client.session().is_authenticated(), eq(false));
}

#[tokio::test]
async fn test_dashboard_counts_both_collections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let stats = client.dashboard_stats().await.unwrap();

    assert_that!(stats.patients, eq(2));
    assert_that!(stats.appointments, eq(1));
}

#[tokio::test]
async fn test_dashboard_fails_when_either_request_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server, "abc123");
    let result = client.dashboard_stats().await;

    assert_that!(result, err(anything()));
}
