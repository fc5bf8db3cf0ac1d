//! clinic-client
//!
//! Authenticated access to the clinic REST backend plus the conventions every
//! screen shares: the session context holding the bearer token, the route
//! guard that gates protected screens, and the list state screens render.

pub mod client;
pub mod error;
pub mod guard;
pub mod list_view;
pub mod session;


pub use client::api_client::ApiClient;
pub use client::auth::{LOGIN_PATH, LoginResponse};
pub use client::dashboard::DashboardStats;
pub use error::{ClientError, FALLBACK_ERROR_MESSAGE, Result as ClientResult};
pub use guard::guard_state::GuardState;
pub use guard::guard_view::GuardView;
pub use guard::navigator::{Navigation, NavigationHistory, Navigator};
pub use guard::route_guard::RouteGuard;
pub use guard::{LOGIN_ROUTE, logout};
pub use list_view::change::Change;
pub use list_view::invalidation::Invalidation;
pub use list_view::list_view::ListView;
pub use session::credential::Credential;
pub use session::file_token_store::FileTokenStore;
pub use session::memory_token_store::MemoryTokenStore;
pub use session::session::Session;
pub use session::session_state::SessionState;
pub use session::token_store::TokenStore;
