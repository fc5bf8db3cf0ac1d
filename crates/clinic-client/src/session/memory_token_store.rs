use crate::{ClientError, ClientResult, Credential, TokenStore};

use std::sync::{Mutex, MutexGuard};

/// Token store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<Credential>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token; an empty token seeds nothing
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Credential::new(token)),
        }
    }

    #[track_caller]
    fn slot(&self) -> ClientResult<MutexGuard<'_, Option<Credential>>> {
        self.token
            .lock()
            .map_err(|_| ClientError::session("In-memory token store lock poisoned"))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<Credential>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, credential: &Credential) -> ClientResult<()> {
        *self.slot()? = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot()? = None;
        Ok(())
    }
}
