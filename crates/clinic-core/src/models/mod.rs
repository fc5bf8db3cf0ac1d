pub mod appointment;
pub mod appointment_status;
pub mod delete_response;
pub mod entity;
pub mod gender;
pub mod patient;

use serde::{Deserialize, Deserializer};

/// Reads blank or missing optional strings as `None`.
///
/// The backend omits empty optional columns on some routes and sends `""`
/// on others; both mean "not set".
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
