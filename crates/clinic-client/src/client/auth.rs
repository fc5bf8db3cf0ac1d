use crate::{ApiClient, ClientError, ClientResult, Credential};

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Backend route that exchanges credentials for a bearer token
pub const LOGIN_PATH: &str = "/login";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
}

impl ApiClient {
    /// Exchange email and password for a token and sign the session in
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Credential> {
        let body = LoginRequest { email, password };
        let response: LoginResponse = self.api(LOGIN_PATH, Method::POST, Some(&body)).await?;

        let credential = Credential::new(response.token)
            .ok_or_else(|| ClientError::request_failed("Login response contained no token", None))?;

        self.session().sign_in(credential.clone())?;
        info!("Logged in as {email}");
        Ok(credential)
    }
}
