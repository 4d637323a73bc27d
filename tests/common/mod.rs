use leiapix::{Credentials, LeiaClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "mock_access_token";

pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test_client".to_string(),
        client_secret: "test_secret".to_string(),
    }
}

/// Mounts a LeiaLogin token mock on `server` and returns a client logged in
/// against it, with `server` doubling as the media API base.
pub async fn login_client(server: &MockServer) -> LeiaClient {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "expires_in": 300,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;

    LeiaClient::login_with_urls(
        &test_credentials(),
        &format!("{}/token", server.uri()),
        &server.uri(),
    )
    .await
    .unwrap()
}
