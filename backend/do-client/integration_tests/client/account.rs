use crate::helpers::{TEST_TOKEN, client_for};

use do_client::USER_AGENT;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full request shape: bearer auth, JSON content type, user agent.
///
/// **WHY THIS MATTERS**: The API rejects requests without `Authorization: Bearer`. The user agent
/// identifies the tool in DigitalOcean's logs.
///
/// **BUG THIS CATCHES**: Would catch a missing header, or the token being sent without the
/// `Bearer` scheme.
#[tokio::test]
async fn given_valid_token_when_get_account_then_sends_auth_headers_and_unwraps_envelope() {
    // GIVEN: A mock API that only answers correctly authenticated requests
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "email": "sammy@example.com",
                "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
                "status": "active",
                "status_message": "",
                "email_verified": true,
                "droplet_limit": 25,
                "floating_ip_limit": 5,
                "volume_limit": 100,
                "team": {"uuid": "5df3e3004a17e242b7c20ca6c9fc25b701a47ece", "name": "My Team"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching the account
    let account = client_for(&server)
        .get_account()
        .await
        .expect("get_account should succeed");

    // THEN: Envelope unwrapped
    assert_eq!(account.email, "sammy@example.com");
    assert_eq!(account.droplet_limit, 25);
    assert!(account.email_verified);
    assert_eq!(account.team.map(|t| t.name), Some(String::from("My Team")));
}
