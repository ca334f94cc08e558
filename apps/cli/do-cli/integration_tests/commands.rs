use crate::helpers::run_against;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ----------------------------------------------------------------------------
// droplets
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_no_droplets_when_listed_then_prints_no_droplets_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"droplets": [], "meta": {"total": 0}})),
        )
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "list"], "").await;

    assert!(invocation.result.is_ok());
    assert_eq!(invocation.stdout, "No droplets found\n");
}

#[tokio::test]
async fn given_no_droplets_when_listed_as_json_then_prints_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplets": []})))
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["--json", "droplets", "list"], "").await;

    assert!(invocation.result.is_ok());
    assert_eq!(invocation.stdout.trim(), "[]");
}

/// **VALUE**: `droplets list --tag` narrows the listing server-side via `tag_name`.
///
/// **BUG THIS CATCHES**: Would catch the flag being parsed but never forwarded to the client.
#[tokio::test]
async fn given_tag_flag_when_listed_then_tag_name_query_sent() {
    // GIVEN: An API that only matches the tagged query
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("tag_name", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplets": []})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let invocation = run_against(&server, &["droplets", "list", "--tag", "web"], "").await;

    // THEN
    assert!(invocation.result.is_ok());
    assert_eq!(invocation.stdout, "No droplets found\n");
}

#[tokio::test]
async fn given_droplets_when_listed_then_table_has_public_ip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [{
                "id": 42,
                "name": "web-1",
                "status": "active",
                "size_slug": "s-1vcpu-1gb",
                "created_at": "2024-03-01T12:34:56Z",
                "region": {"slug": "nyc3", "name": "New York 3"},
                "networks": {"v4": [
                    {"ip_address": "203.0.113.10", "netmask": "255.255.240.0", "gateway": "203.0.113.1", "type": "public"}
                ], "v6": []}
            }]
        })))
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "list"], "").await;

    assert!(invocation.result.is_ok());
    let lines: Vec<&str> = invocation.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("web-1"));
    assert!(lines[1].contains("203.0.113.10"));
    assert!(lines[1].ends_with("2024-03-01"));
}

/// **VALUE**: Declining the delete prompt sends nothing and still succeeds.
///
/// **WHY THIS MATTERS**: Deletion is irreversible. A declined prompt that still issues the DELETE
/// would destroy a machine the user meant to keep.
///
/// **BUG THIS CATCHES**: Would catch the prompt result being ignored, or `Cancelled` being
/// treated as an error exit.
#[tokio::test]
async fn given_declined_prompt_when_delete_then_cancelled_and_no_request() {
    // GIVEN: A mock that fails the test if DELETE arrives
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Answering "n"
    let invocation = run_against(&server, &["droplets", "delete", "42"], "n\n").await;

    // THEN: Prompt shown, cancelled, success
    assert!(invocation.result.is_ok());
    assert_eq!(
        invocation.stdout,
        "Are you sure you want to delete droplet 42? (y/N): Cancelled\n"
    );
}

#[tokio::test]
async fn given_confirmed_prompt_when_delete_then_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "delete", "42"], "yes\n").await;

    assert!(invocation.result.is_ok());
    assert!(invocation.stdout.ends_with("Droplet 42 deleted successfully\n"));
}

#[tokio::test]
async fn given_force_flag_when_delete_then_no_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "delete", "42", "--force"], "").await;

    assert!(invocation.result.is_ok());
    assert_eq!(invocation.stdout, "Droplet 42 deleted successfully\n");
}

#[tokio::test]
async fn given_create_flags_when_create_then_posts_body_and_prints_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(body_json(json!({
            "name": "web-1",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "tags": ["a", "b"],
            "monitoring": true
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplet": {"id": 42, "name": "web-1", "status": "new", "tags": ["a", "b"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invocation = run_against(
        &server,
        &[
            "droplets", "create", "--name", "web-1", "--region", "nyc3", "--size", "s-1vcpu-1gb",
            "--image", "ubuntu-24-04-x64", "--tags", "a,b", "--monitoring",
        ],
        "",
    )
    .await;

    assert!(invocation.result.is_ok(), "{:?}", invocation.result.err());
    assert!(invocation.stdout.starts_with("Droplet created successfully!\n  ID: 42\n"));
}

#[tokio::test]
async fn given_reboot_when_run_then_prints_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets/42/actions"))
        .and(body_json(json!({"type": "reboot"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "action": {
                "id": 7, "status": "in-progress", "type": "reboot",
                "started_at": "2024-03-01T12:40:00Z", "resource_id": 42, "resource_type": "droplet"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "reboot", "42"], "").await;

    assert!(invocation.result.is_ok());
    assert_eq!(
        invocation.stdout,
        "Requested reboot for droplet 42 (action 7, status in-progress)\n"
    );
}

#[tokio::test]
async fn given_api_error_when_command_runs_then_error_message_is_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"id": "not_found", "message": "The resource you were accessing could not be found."}]
        })))
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["droplets", "get", "5"], "").await;

    let error = invocation.result.expect_err("404 should fail");
    assert_eq!(
        error.message(),
        "The resource you were accessing could not be found."
    );
    assert!(invocation.stdout.is_empty());
}

// ----------------------------------------------------------------------------
// account / catalog
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_account_when_info_then_prints_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "email": "sammy@example.com", "uuid": "abc", "status": "active",
                "email_verified": true, "droplet_limit": 25, "floating_ip_limit": 5,
                "volume_limit": 100
            }
        })))
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["account", "info"], "").await;

    assert!(invocation.result.is_ok());
    assert!(invocation.stdout.starts_with("Account Information:\n  Email: sammy@example.com\n"));
    assert!(invocation.stdout.contains("  Droplet Limit: 25\n"));
    assert!(!invocation.stdout.contains("Team"));
}

#[tokio::test]
async fn given_sizes_when_listed_as_json_then_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/sizes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sizes": [{"slug": "s-1vcpu-1gb", "memory": 1024, "vcpus": 1, "disk": 25, "price_monthly": 6.0}]
        })))
        .mount(&server)
        .await;

    let invocation = run_against(&server, &["sizes", "list", "--json"], "").await;

    assert!(invocation.result.is_ok());
    let value: serde_json::Value = serde_json::from_str(&invocation.stdout).expect("valid JSON");
    assert_eq!(value[0]["slug"], "s-1vcpu-1gb");
    assert_eq!(value[0]["memory"], 1024);
}
