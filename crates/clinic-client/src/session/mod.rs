//! Session context: the single owner of the bearer token.
//!
//! Screens, the request function and the route guard all read the token
//! through a shared [`Session`](session::Session) instead of touching storage
//! directly. Writers (login, logout) go through it too, so subscribers see
//! every transition.

pub mod credential;
pub mod file_token_store;
pub mod memory_token_store;
pub mod session;
pub mod session_state;
pub mod token_store;
