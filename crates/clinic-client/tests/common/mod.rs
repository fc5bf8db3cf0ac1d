//! Shared helpers for the clinic-client integration tests

#![allow(dead_code)]

use clinic_client::{ApiClient, MemoryTokenStore, Session};

use wiremock::MockServer;

/// Client with no stored token
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Session::anonymous())
}

/// Client whose session already holds `token`
pub fn signed_in_client(server: &MockServer, token: &str) -> ApiClient {
    let session = Session::open(MemoryTokenStore::with_token(token)).unwrap();
    ApiClient::new(&server.uri(), session)
}

/// Authorization header of the only request the server saw
pub async fn sole_authorization_header(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");

    requests[0]
        .headers
        .get("authorization")
        .map(|value| value.to_str().unwrap().to_string())
}
