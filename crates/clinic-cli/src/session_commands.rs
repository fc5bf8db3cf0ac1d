//! Commands that manage the session itself; none of them is guarded.

use crate::{CliResult, Output};

use clinic_client::{ApiClient, Navigator, logout as sign_out_and_leave};

use serde::Serialize;

/// What `clinic status` reports
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub server: String,
}

pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
    output: &mut Output<'_>,
) -> CliResult<()> {
    client.login(email, password).await?;
    output.message(&format!("Logged in as {email}"))
}

/// Clear the token, then leave through a full navigation to the login route
pub fn logout(
    client: &ApiClient,
    navigator: &mut dyn Navigator,
    output: &mut Output<'_>,
) -> CliResult<()> {
    sign_out_and_leave(client.session(), navigator)?;
    output.message("Logged out")
}

pub fn status(client: &ApiClient, output: &mut Output<'_>) -> CliResult<()> {
    let state = client.session().refresh()?;
    let status = SessionStatus {
        authenticated: state.is_authenticated(),
        server: client.base_url().to_string(),
    };

    output.value(&status, |s| {
        if s.authenticated {
            format!("Signed in ({})", s.server)
        } else {
            format!("Not signed in ({})", s.server)
        }
    })
}
