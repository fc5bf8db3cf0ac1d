use crate::{ClientResult, Credential, MemoryTokenStore, SessionState, TokenStore};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

/// Shared session context.
///
/// Cloning is cheap; all clones observe the same state. The in-memory state
/// only changes through `sign_in`, `sign_out` and `refresh`, and every change
/// is published to subscribers.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Box<dyn TokenStore>,
    state: watch::Sender<SessionState>,
}

impl Session {
    /// Open a session over a store, reading whatever token it already holds
    pub fn open(store: impl TokenStore + 'static) -> ClientResult<Self> {
        let initial = SessionState::from_credential(store.load()?);
        let (state, _) = watch::channel(initial);

        Ok(Self {
            inner: Arc::new(SessionInner {
                store: Box::new(store),
                state,
            }),
        })
    }

    /// Session with an empty in-memory store
    pub fn anonymous() -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);

        Self {
            inner: Arc::new(SessionInner {
                store: Box::new(MemoryTokenStore::new()),
                state,
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn credential(&self) -> Option<Credential> {
        self.inner.state.borrow().credential().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Persist a freshly issued token and publish the authenticated state
    pub fn sign_in(&self, credential: Credential) -> ClientResult<()> {
        self.inner.store.save(&credential)?;
        self.publish(SessionState::Authenticated(credential));
        info!("Signed in");
        Ok(())
    }

    /// Forget the token both in storage and in memory
    pub fn sign_out(&self) -> ClientResult<()> {
        self.inner.store.clear()?;
        self.publish(SessionState::Anonymous);
        info!("Signed out");
        Ok(())
    }

    /// Re-read the store, picking up writes made outside this session
    pub fn refresh(&self) -> ClientResult<SessionState> {
        let next = SessionState::from_credential(self.inner.store.load()?);
        if self.publish(next.clone()) {
            debug!(
                "Session refreshed: {}",
                if next.is_authenticated() {
                    "authenticated"
                } else {
                    "anonymous"
                }
            );
        }
        Ok(next)
    }

    /// Receive every future state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Returns true when the state actually changed
    fn publish(&self, next: SessionState) -> bool {
        self.inner.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}
