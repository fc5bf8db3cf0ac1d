use clinic_client::ClientError;
use clinic_config::ConfigError;
use clinic_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize output: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("{message}: {source} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    AccessDenied { location: ErrorLocation },

    /// Failure already shown to the user as part of the command output
    #[error("Command failed {location}")]
    Reported { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn json(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied() -> Self {
        CliError::AccessDenied {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reported() -> Self {
        CliError::Reported {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the output already told the user what went wrong
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Reported { .. })
    }

    /// Message for the user, without source locations
    pub fn message(&self) -> String {
        match self {
            CliError::Client(e) => e.message().to_string(),
            CliError::Core(CoreError::Validation { errors, .. }) => {
                format!("Please correct the form: {errors}")
            }
            CliError::Core(CoreError::InvalidGender { value, .. }) => {
                format!("Invalid gender: {value}")
            }
            CliError::Core(CoreError::InvalidAppointmentStatus { value, .. }) => {
                format!("Invalid appointment status: {value}")
            }
            CliError::Config(e) => e.to_string(),
            CliError::Json { source, .. } => format!("Failed to serialize output: {source}"),
            CliError::Io {
                message, source, ..
            } => format!("{message}: {source}"),
            CliError::Logger { message, .. } => message.clone(),
            CliError::AccessDenied { .. } => "Not signed in".to_string(),
            CliError::Reported { .. } => "Command failed".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
