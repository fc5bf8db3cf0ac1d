//! Client-side form validation.
//!
//! These checks run before a record is sent to the backend. The backend
//! performs no equivalent checks, so nothing here is authoritative.

pub mod field_errors;
pub mod form_mode;

use crate::{Appointment, CoreError, CoreResult, FieldErrors, FormMode, Patient};

use chrono::{DateTime, Utc};

pub const MIN_PATIENT_AGE: i32 = 1;
pub const MAX_PATIENT_AGE: i32 = 150;

/// Validate a patient form, reporting every failing field at once
#[track_caller]
pub fn validate_patient(patient: &Patient) -> CoreResult<()> {
    let mut errors = FieldErrors::new();

    if patient.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }

    if !(MIN_PATIENT_AGE..=MAX_PATIENT_AGE).contains(&patient.age) {
        errors.push("age", "Age must be between 1 and 150");
    }

    if patient.phone.trim().is_empty() {
        errors.push("phone", "Phone is required");
    } else if !is_valid_phone(&patient.phone) {
        errors.push("phone", "Invalid phone number format");
    }

    if let Some(email) = patient.email.as_deref()
        && !email.is_empty()
        && !is_valid_email(email)
    {
        errors.push("email", "Invalid email format");
    }

    finish(errors)
}

/// Validate an appointment form.
///
/// The "not in the past" rule only applies when creating; an existing
/// appointment may be edited after its date has passed.
#[track_caller]
pub fn validate_appointment(
    appointment: &Appointment,
    mode: FormMode,
    now: DateTime<Utc>,
) -> CoreResult<()> {
    let mut errors = FieldErrors::new();

    if appointment.patient_id <= 0 {
        errors.push("patientId", "Please select a patient");
    }

    if appointment.doctor.trim().is_empty() {
        errors.push("doctor", "Doctor name is required");
    }

    if mode == FormMode::Create && appointment.date < now {
        errors.push("date", "Appointment date cannot be in the past");
    }

    finish(errors)
}

/// Digits, whitespace, `-`, `+`, `(` and `)` only; must be non-empty
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

/// `local@domain.tld` with no whitespace and exactly one `@`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[track_caller]
fn finish(errors: FieldErrors) -> CoreResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation(errors))
    }
}
