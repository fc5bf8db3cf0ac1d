//! Appointment entity - a scheduled visit of a patient with a doctor.

use crate::models::blank_as_none;
use crate::{AppointmentStatus, Entity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// References `Patient::id`
    #[serde(rename = "patientId")]
    pub patient_id: i64,
    /// Doctor's display name
    pub doctor: String,
    /// Start of the visit, sent as RFC 3339 in UTC
    pub date: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

impl Appointment {
    /// Create an unsaved appointment
    pub fn new(patient_id: i64, doctor: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            patient_id,
            doctor: doctor.into(),
            date,
            notes: None,
            status: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Effective status; the backend leaves it unset on freshly created rows
    pub fn status(&self) -> AppointmentStatus {
        self.status.unwrap_or_default()
    }
}

impl Entity for Appointment {
    const COLLECTION: &'static str = "/api/appointments";
    const LABEL: &'static str = "appointment";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
