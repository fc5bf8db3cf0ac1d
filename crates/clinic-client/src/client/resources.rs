use crate::{ApiClient, ClientResult};

use clinic_core::{Appointment, DeleteResponse, Entity, Patient};

use reqwest::Method;

/// CRUD over the entity collections.
///
/// Mutations return what the backend sent back so callers can patch their
/// local lists instead of refetching.
impl ApiClient {
    /// List every record of a collection
    pub async fn list<E: Entity>(&self) -> ClientResult<Vec<E>> {
        self.get(E::COLLECTION).await
    }

    /// Fetch one record by id
    pub async fn fetch<E: Entity>(&self, id: i64) -> ClientResult<E> {
        self.get(&E::member_path(id)).await
    }

    /// Create a record; returns it with its assigned id
    pub async fn create<E: Entity>(&self, entity: &E) -> ClientResult<E> {
        self.api(E::COLLECTION, Method::POST, Some(entity)).await
    }

    /// Replace a persisted record
    pub async fn update<E: Entity>(&self, id: i64, entity: &E) -> ClientResult<E> {
        self.api(&E::member_path(id), Method::PUT, Some(entity)).await
    }

    /// Delete a record by id
    pub async fn remove<E: Entity>(&self, id: i64) -> ClientResult<DeleteResponse> {
        let response: Option<DeleteResponse> = self
            .api::<_, ()>(&E::member_path(id), Method::DELETE, None)
            .await?;
        Ok(response.unwrap_or_default())
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    pub async fn list_patients(&self) -> ClientResult<Vec<Patient>> {
        self.list().await
    }

    pub async fn get_patient(&self, id: i64) -> ClientResult<Patient> {
        self.fetch(id).await
    }

    pub async fn create_patient(&self, patient: &Patient) -> ClientResult<Patient> {
        self.create(patient).await
    }

    pub async fn update_patient(&self, id: i64, patient: &Patient) -> ClientResult<Patient> {
        self.update(id, patient).await
    }

    pub async fn delete_patient(&self, id: i64) -> ClientResult<DeleteResponse> {
        self.remove::<Patient>(id).await
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub async fn list_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.list().await
    }

    pub async fn get_appointment(&self, id: i64) -> ClientResult<Appointment> {
        self.fetch(id).await
    }

    pub async fn create_appointment(&self, appointment: &Appointment) -> ClientResult<Appointment> {
        self.create(appointment).await
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        appointment: &Appointment,
    ) -> ClientResult<Appointment> {
        self.update(id, appointment).await
    }

    pub async fn delete_appointment(&self, id: i64) -> ClientResult<DeleteResponse> {
        self.remove::<Appointment>(id).await
    }
}
