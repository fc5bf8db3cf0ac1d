/// A completed mutation of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<E> {
    /// Record returned by a create call
    Created(E),
    /// Record returned by an update call
    Updated(E),
    /// Id of a deleted record
    Deleted(i64),
}
