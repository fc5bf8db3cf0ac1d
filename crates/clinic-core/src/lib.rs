pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::appointment::Appointment;
pub use models::appointment_status::AppointmentStatus;
pub use models::delete_response::DeleteResponse;
pub use models::entity::Entity;
pub use models::gender::Gender;
pub use models::patient::Patient;
pub use validation::field_errors::{FieldError, FieldErrors};
pub use validation::form_mode::FormMode;
pub use validation::{
    MAX_PATIENT_AGE, MIN_PATIENT_AGE, is_valid_email, is_valid_phone, validate_appointment,
    validate_patient,
};
