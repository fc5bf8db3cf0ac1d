use crate::{ClientError, ClientResult, Session};

use clinic_config::ApiConfig;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the clinic REST backend.
///
/// Every call goes through [`ApiClient::api`]: the bearer token is taken from
/// the session at call time, the body is sent as JSON, and any non-success
/// response becomes a single [`ClientError::Request`]. Nothing is retried,
/// cached or deduplicated.
pub struct ApiClient {
    base_url: String,
    session: Session,
    http: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend origin (e.g., "http://localhost:8080")
    /// * `session` - Session providing the bearer token
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            http: ReqwestClient::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout
    #[track_caller]
    pub fn from_config(config: &ApiConfig, session: Session) -> ClientResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::unexpected)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request with the JSON content type and, when signed in, the
    /// bearer header
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(credential) = self.session.credential() {
            req = req.header(AUTHORIZATION, credential.bearer());
        }

        req
    }

    /// Perform an authenticated call and decode the JSON response.
    ///
    /// # Arguments
    /// * `path` - Resource path appended to the base URL (e.g., "/api/patients")
    /// * `method` - HTTP verb
    /// * `body` - Optional payload, serialized as JSON
    ///
    /// A non-success status fails with the body's `error` string, or
    /// `HTTP error! status: <code>` when there is none. Network and decode
    /// failures fail with [`crate::FALLBACK_ERROR_MESSAGE`].
    pub async fn api<T, B>(&self, path: &str, method: Method, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(
            "{} {} (authenticated: {})",
            method,
            path,
            self.session.is_authenticated()
        );

        let mut req = self.request(method.clone(), path);
        if let Some(body) = body {
            req = req.body(serde_json::to_vec(body)?);
        }

        let response = req.send().await.map_err(|e| {
            warn!("{method} {path} could not be sent: {e}");
            ClientError::unexpected(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = match server_error_message(&bytes) {
                Some(message) => ClientError::request_failed(message, Some(status.as_u16())),
                None => ClientError::from_status(status),
            };
            warn!("{method} {path} failed: {}", error.message());
            return Err(error);
        }

        decode_body(&bytes).map_err(|e| {
            warn!("{method} {path} returned an undecodable body: {e}");
            ClientError::unexpected(e)
        })
    }

    /// GET a resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.api::<T, ()>(path, Method::GET, None).await
    }
}

/// Message from an error response body.
///
/// Accepts `{"error": "..."}` and the nested `{"error": {"message": "..."}}`
/// form. Other truthy scalars are used as text; empty strings, `0`, `false`,
/// `null` and arrays count as absent.
pub(crate) fn server_error_message(bytes: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(bytes).ok()?;
    let error = body.get("error")?;

    let message = match error {
        Value::String(message) => message.clone(),
        Value::Object(_) => error.get("message")?.as_str()?.to_string(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Decode a success body; an empty body decodes as JSON `null`
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(bytes)
    }
}
