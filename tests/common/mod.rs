use pfsense_client::PfSenseClient;
use serde_json::{json, Value};

/// `Authorization` header for the `test-user` / `test-password` credentials.
#[allow(dead_code)]
pub const BASIC_AUTH: &str = "Basic dGVzdC11c2VyOnRlc3QtcGFzc3dvcmQ=";

/// Build a client pointed at the mock server with predefined credentials.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> PfSenseClient {
    PfSenseClient::builder()
        .host(server_url)
        .credentials("test-user", "test-password")
        .build()
        .expect("Failed to build PfSenseClient")
}

/// Wrap `data` in a successful response envelope.
#[allow(dead_code)]
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "code": 200,
        "status": "ok",
        "response_id": "SUCCESS",
        "message": "",
        "data": data
    })
}

/// An error envelope as returned alongside non-2xx statuses.
#[allow(dead_code)]
pub fn error_envelope(code: u16, status: &str, message: &str) -> Value {
    json!({
        "code": code,
        "status": status,
        "response_id": "ERROR",
        "message": message,
        "data": []
    })
}
