use crate::{ApiClient, ClientResult};

use clinic_core::{Appointment, Entity, Patient};

use serde::Serialize;
use serde_json::Value;

/// Record counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub patients: usize,
    pub appointments: usize,
}

impl ApiClient {
    /// Fetch both collections concurrently and count them.
    ///
    /// Rows are counted without decoding them into entities; either request
    /// failing fails the whole call.
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        let (patients, appointments) = tokio::try_join!(
            self.get::<Vec<Value>>(Patient::COLLECTION),
            self.get::<Vec<Value>>(Appointment::COLLECTION)
        )?;

        Ok(DashboardStats {
            patients: patients.len(),
            appointments: appointments.len(),
        })
    }
}
