use crate::FieldErrors;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid appointment status: {value} {location}")]
    InvalidAppointmentStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller's location
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors carried by a validation failure, if any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
