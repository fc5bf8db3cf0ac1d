/// What a guarded screen shows for the current guard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    /// Check not finished; show a spinner, never the protected content
    Loading,
    /// Access denied; render nothing while the redirect happens
    Hidden,
    Content(T),
}

impl<T> GuardView<T> {
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Content(content) => Some(content),
            _ => None,
        }
    }
}
