//! Patient entity - a person registered with the clinic.

use crate::models::blank_as_none;
use crate::{Entity, Gender};

use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// Extra fields the backend attaches (room assignment, timestamps, nested
/// records) are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Assigned by the backend on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub gender: Gender,
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
}

impl Patient {
    /// Create an unsaved patient with the required fields
    pub fn new(name: impl Into<String>, age: i32, gender: Gender, phone: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            gender,
            phone: phone.into(),
            email: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Check if the backend has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Entity for Patient {
    const COLLECTION: &'static str = "/api/patients";
    const LABEL: &'static str = "patient";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
