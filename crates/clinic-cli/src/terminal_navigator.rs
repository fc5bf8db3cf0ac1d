use clinic_client::{LOGIN_ROUTE, NavigationHistory, Navigator};

use std::io::Write;

/// Navigator for a terminal session.
///
/// There are no screens to move between, so navigations become hints on
/// stderr: a redirect to the login route tells the user how to sign in.
/// Every navigation is also recorded.
pub struct TerminalNavigator<W: Write> {
    out: W,
    history: NavigationHistory,
}

impl TerminalNavigator<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            history: NavigationHistory::new(),
        }
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn hint(&mut self, text: &str) {
        // Nowhere left to report a failed hint
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Navigator for TerminalNavigator<W> {
    fn push(&mut self, path: &str) {
        self.history.push(path);
        if path == LOGIN_ROUTE {
            self.hint("Not signed in. Run `clinic login --email <email> --password <password>` first.");
        } else {
            self.hint(&format!("Redirected to {path}"));
        }
    }

    fn assign(&mut self, path: &str) {
        self.history.assign(path);
        if path == LOGIN_ROUTE {
            self.hint("Signed out. Run `clinic login` to sign in again.");
        } else {
            self.hint(&format!("Navigated to {path}"));
        }
    }
}
