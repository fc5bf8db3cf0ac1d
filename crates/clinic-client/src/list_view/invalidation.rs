/// How a list view reacts to a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Invalidation {
    /// Apply the returned record to the local list
    Patch,
    /// Discard local state and fetch the whole list again
    #[default]
    Refetch,
}
