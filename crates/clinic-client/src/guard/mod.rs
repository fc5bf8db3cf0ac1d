//! Route protection for screens that require a signed-in user.

pub mod guard_state;
pub mod guard_view;
pub mod navigator;
pub mod route_guard;

use crate::{ClientResult, Navigator, Session};

/// Screen shown to anonymous users
pub const LOGIN_ROUTE: &str = "/login";

/// Sign out and leave through a full navigation to the login screen.
///
/// Mounted guards do not observe the change; the full navigation discards
/// them, and the next mount re-checks. Navigation happens even when clearing
/// the store fails.
pub fn logout(session: &Session, navigator: &mut dyn Navigator) -> ClientResult<()> {
    let result = session.sign_out();
    navigator.assign(LOGIN_ROUTE);
    result
}
