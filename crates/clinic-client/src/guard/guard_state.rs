/// Lifecycle of a route guard.
///
/// `Unchecked -> Checking -> {Denied | Granted}`; the outcome is final for
/// the lifetime of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Checking,
    /// No token; a navigation to the login route has been issued
    Denied,
    Granted,
}

impl GuardState {
    /// Whether the mount-time check has completed
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Denied | Self::Granted)
    }
}
