use crate::{ClientResult, Credential};

/// Persistent home of the bearer token.
///
/// A store holds at most one token. Implementations must be safe to share
/// between the request function, the route guard and any navigation shell.
pub trait TokenStore: Send + Sync {
    /// Read the stored token; `Ok(None)` when nothing is stored
    fn load(&self) -> ClientResult<Option<Credential>>;

    /// Replace the stored token
    fn save(&self, credential: &Credential) -> ClientResult<()>;

    /// Remove the stored token; succeeds when nothing is stored
    fn clear(&self) -> ClientResult<()>;
}
