use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Message used when a request fails without a usable server or status message
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the clinic client.
///
/// Every failed API call collapses into `Request`; client, server and network
/// failures are not distinguished beyond the optional HTTP status.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {message} {location}")]
    Request {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Session store error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ClientError {
    /// Request failure with an explicit message
    #[track_caller]
    pub fn request_failed(message: impl Into<String>, status: Option<u16>) -> Self {
        ClientError::Request {
            message: message.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Request failure synthesized from a non-success status
    #[track_caller]
    pub fn from_status(status: StatusCode) -> Self {
        Self::request_failed(
            format!("HTTP error! status: {}", status.as_u16()),
            Some(status.as_u16()),
        )
    }

    /// Network, encode or decode failure, reported with the fallback message
    #[track_caller]
    pub fn unexpected<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ClientError::Request {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
            status: None,
            location: ErrorLocation::from(Location::caller()),
            source: Some(Box::new(source)),
        }
    }

    /// Token store failure without an underlying I/O error
    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        ClientError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Token store I/O failure
    #[track_caller]
    pub fn session_io(message: impl Into<String>, source: std::io::Error) -> Self {
        ClientError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(source),
        }
    }

    /// Human-readable message without the location suffix
    pub fn message(&self) -> &str {
        match self {
            ClientError::Request { message, .. } | ClientError::Session { message, .. } => {
                message
            }
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => *status,
            ClientError::Session { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::unexpected(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::unexpected(err)
    }
}

pub type Result<T> = StdResult<T, ClientError>;
