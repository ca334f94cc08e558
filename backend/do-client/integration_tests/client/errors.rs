use crate::helpers::{client_for, client_with_token};

use do_client::ClientError;

use common::HttpStatusCode;
use models::DropletFilter;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A missing token fails locally without touching the network.
///
/// **WHY THIS MATTERS**: Sending an unauthenticated request leaks nothing but wastes a round trip
/// and produces a confusing 401 instead of "token is required".
///
/// **BUG THIS CATCHES**: Would catch the token check moving after `send()`.
#[tokio::test]
async fn given_empty_token_when_request_made_then_authentication_error_and_no_request_sent() {
    // GIVEN: A client with no token
    let server = MockServer::start().await;
    let client = client_with_token(&server, "");

    // WHEN: Calling any endpoint
    let error = client.list_droplets(&DropletFilter::default()).await.unwrap_err();

    // THEN: Authentication error, nothing received
    assert!(matches!(error, ClientError::Authentication { status: None, .. }));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "No request should reach the server");
}

#[tokio::test]
async fn given_422_with_error_list_when_request_made_then_api_error_carries_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets/1/actions"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"id": "e1", "message": "bad size"}]
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).reboot_droplet(1).await.unwrap_err();

    assert_eq!(error.message(), "bad size");
    assert_eq!(error.status(), Some(HttpStatusCode(422)));
    assert_eq!(error.errors().map(<[_]>::len), Some(1));
}

#[tokio::test]
async fn given_500_plain_text_when_request_made_then_status_line_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let error = client_for(&server).get_account().await.unwrap_err();

    assert_eq!(error.message(), "HTTP 500: Internal Server Error");
    assert!(error.errors().is_none());
    assert_eq!(error.status(), Some(HttpStatusCode(500)));
}

#[tokio::test]
async fn given_401_when_request_made_then_authentication_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "id": "unauthorized",
            "message": "Unable to authenticate you."
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).get_account().await.unwrap_err();

    assert!(matches!(
        error,
        ClientError::Authentication {
            status: Some(HttpStatusCode(401)),
            ..
        }
    ));
}

/// **BUG THIS CATCHES**: Would catch an HTML error page from a proxy (served with 200) being
/// reported as a transport failure or, worse, decoded into defaults.
#[tokio::test]
async fn given_2xx_non_json_body_when_request_made_then_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).list_droplets(&DropletFilter::default()).await.unwrap_err();

    assert!(matches!(error, ClientError::InvalidResponse { .. }));
}

#[tokio::test]
async fn given_unreachable_server_when_request_made_then_http_error() {
    let config = do_client::ClientConfig::new("dop_v1_token", "http://127.0.0.1:1")
        .expect("valid URL");
    let client = do_client::DigitalOceanClient::new(config).expect("client");

    let error = client.get_account().await.unwrap_err();

    assert!(matches!(error, ClientError::Http { .. }));
}

#[tokio::test]
async fn given_token_presence_when_ensure_authenticated_then_only_empty_token_fails() {
    let server = MockServer::start().await;

    let missing = client_with_token(&server, "").ensure_authenticated().unwrap_err();

    assert!(matches!(missing, ClientError::Authentication { status: None, .. }));
    assert!(client_for(&server).ensure_authenticated().is_ok());
}
