use crate::{GuardState, GuardView, LOGIN_ROUTE, Navigator, Session};

use log::{debug, warn};

/// Gate in front of a protected screen.
///
/// Until [`RouteGuard::mount`] runs, the guard renders a loading view so
/// protected content never flashes before the check. The check runs once:
/// a guard that has been mounted keeps its decision even if the session
/// changes later. Mount a new guard to re-check.
#[derive(Debug)]
pub struct RouteGuard {
    session: Session,
    login_route: String,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            login_route: LOGIN_ROUTE.to_string(),
            state: GuardState::Unchecked,
        }
    }

    /// Redirect denied users somewhere other than the default login screen
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Run the mount-time check.
    ///
    /// Reads the token store through the session; with no token the guard
    /// pushes the login route and denies, otherwise it grants. Calling this
    /// again after the first time changes nothing.
    pub fn mount(&mut self, navigator: &mut dyn Navigator) -> GuardState {
        if self.state != GuardState::Unchecked {
            debug!("Route guard already mounted ({:?})", self.state);
            return self.state;
        }

        self.state = GuardState::Checking;

        let authenticated = match self.session.refresh() {
            Ok(state) => state.is_authenticated(),
            Err(e) => {
                warn!("Session check failed, treating as signed out: {e}");
                false
            }
        };

        if authenticated {
            self.state = GuardState::Granted;
        } else {
            debug!("No session token; redirecting to {}", self.login_route);
            self.state = GuardState::Denied;
            navigator.push(&self.login_route);
        }

        self.state
    }

    /// Render the guarded screen; `content` only runs when access is granted
    pub fn render<T, F>(&self, content: F) -> GuardView<T>
    where
        F: FnOnce() -> T,
    {
        match self.state {
            GuardState::Unchecked | GuardState::Checking => GuardView::Loading,
            GuardState::Denied => GuardView::Hidden,
            GuardState::Granted => GuardView::Content(content()),
        }
    }
}
