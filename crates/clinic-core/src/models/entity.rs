use serde::Serialize;
use serde::de::DeserializeOwned;

/// A domain record served by one REST collection.
///
/// The identifier is `None` until the backend has persisted the record.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path, e.g. `/api/patients`
    const COLLECTION: &'static str;

    /// Human-readable singular name used in prompts and log lines
    const LABEL: &'static str;

    fn id(&self) -> Option<i64>;

    /// Path of a single persisted record, e.g. `/api/patients/5`
    fn member_path(id: i64) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }
}
