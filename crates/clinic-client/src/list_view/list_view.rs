use crate::{Change, ClientError, ClientResult, Invalidation};

use clinic_core::{DeleteResponse, Entity};

use std::future::Future;

use log::warn;

/// State behind a list screen: the rows, a loading flag, an inline error,
/// and the id of the row currently being deleted.
///
/// Load failures are kept inline for the screen to render; they are not
/// returned. Only one delete may be in flight at a time.
#[derive(Debug, Clone)]
pub struct ListView<E: Entity> {
    items: Vec<E>,
    loading: bool,
    error: Option<String>,
    deleting_id: Option<i64>,
    invalidation: Invalidation,
}

impl<E: Entity> ListView<E> {
    /// New view; it starts out loading, before the first fetch
    pub fn new(invalidation: Invalidation) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            deleting_id: None,
            invalidation,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Message of the last failed load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn invalidation(&self) -> Invalidation {
        self.invalidation
    }

    /// Fetch the list, replacing the rows on success
    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<Vec<E>>>,
    {
        self.loading = true;
        self.error = None;

        match fetch().await {
            Ok(items) => self.items = items,
            Err(e) => {
                warn!("Failed to load {} list: {}", E::LABEL, e.message());
                self.error = Some(e.message().to_string());
            }
        }

        self.loading = false;
    }

    /// Record a completed mutation.
    ///
    /// Returns `true` when the caller must refetch; under
    /// [`Invalidation::Patch`] the change is applied locally instead.
    pub fn record(&mut self, change: Change<E>) -> bool {
        match self.invalidation {
            Invalidation::Refetch => true,
            Invalidation::Patch => {
                self.apply(change);
                false
            }
        }
    }

    /// Patch the local rows with a mutation result
    pub fn apply(&mut self, change: Change<E>) {
        match change {
            Change::Created(entity) => self.items.push(entity),
            Change::Updated(entity) => {
                let slot = entity
                    .id()
                    .and_then(|id| self.items.iter_mut().find(|item| item.id() == Some(id)));
                match slot {
                    Some(slot) => *slot = entity,
                    None => self.items.push(entity),
                }
            }
            Change::Deleted(id) => self.items.retain(|item| item.id() != Some(id)),
        }
    }

    /// Mark a row as being deleted; `false` if another delete is in flight
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.deleting_id.is_some() {
            return false;
        }
        self.deleting_id = Some(id);
        true
    }

    pub fn finish_delete(&mut self) {
        self.deleting_id = None;
    }

    pub fn deleting_id(&self) -> Option<i64> {
        self.deleting_id
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting_id == Some(id)
    }

    /// Run a delete for one row.
    ///
    /// The row is marked as deleting for the duration of the call. On success
    /// the deletion is recorded and the result says whether to refetch.
    /// Errors are returned for the caller to surface.
    pub async fn delete<F, Fut>(&mut self, id: i64, delete: F) -> ClientResult<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<DeleteResponse>>,
    {
        if !self.begin_delete(id) {
            return Err(ClientError::request_failed(
                format!("Another {} is already being deleted", E::LABEL),
                None,
            ));
        }

        let result = delete().await;
        self.finish_delete();

        result.map(|_| self.record(Change::Deleted(id)))
    }
}

impl<E: Entity> Default for ListView<E> {
    fn default() -> Self {
        Self::new(Invalidation::default())
    }
}
