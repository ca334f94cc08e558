use crate::helpers::{action_json, client_for, droplet_json};

use models::{CreateDropletRequest, DropletFilter};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ----------------------------------------------------------------------------
// list / get
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_empty_droplet_list_when_listed_then_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"droplets": [], "meta": {"total": 0}})),
        )
        .mount(&server)
        .await;

    let droplets = client_for(&server).list_droplets(&DropletFilter::default()).await.expect("list");

    assert!(droplets.is_empty());
}

#[tokio::test]
async fn given_droplets_when_listed_then_server_order_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(3, "web-3", &[]), droplet_json(1, "web-1", &[])],
            "links": {},
            "meta": {"total": 2}
        })))
        .mount(&server)
        .await;

    let droplets = client_for(&server).list_droplets(&DropletFilter::default()).await.expect("list");

    let ids: Vec<u64> = droplets.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(droplets[0].public_ipv4(), Some("203.0.113.10"));
    assert_eq!(droplets[0].region_slug(), Some("nyc3"));
    assert_eq!(droplets[0].created_date(), "2024-03-01");
}

/// **VALUE**: A tag filter and paging reach the API as `tag_name`, `page` and `per_page`.
///
/// **WHY THIS MATTERS**: Accounts with many droplets are usually sliced by tag; a dropped
/// parameter silently returns every droplet instead.
///
/// **BUG THIS CATCHES**: Would catch the filter being ignored, or the tag being sent as `tag`.
#[tokio::test]
async fn given_tag_and_paging_when_listed_then_query_params_sent() {
    // GIVEN: An API that only answers the filtered query
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("tag_name", "web"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(7, "web-7", &["web"])],
            "meta": {"total": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = DropletFilter {
        tag: Some(String::from("web")),
        page: Some(2),
        per_page: Some(50),
    };

    // WHEN: Listing with the filter
    let droplets = client_for(&server).list_droplets(&filter).await.expect("list");

    // THEN: The filtered droplet comes back
    assert_eq!(droplets.len(), 1);
    assert_eq!(droplets[0].tags, vec![String::from("web")]);
}

#[tokio::test]
async fn given_default_filter_when_listed_then_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplets": []})))
        .mount(&server)
        .await;

    client_for(&server)
        .list_droplets(&DropletFilter::default())
        .await
        .expect("list");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

/// **VALUE**: A missing droplet is reported as a 404 API error the caller can recognise.
///
/// **BUG THIS CATCHES**: Would catch 404 being decoded as an empty droplet, or being folded
/// into a transport error without its status.
#[tokio::test]
async fn given_unknown_id_when_get_droplet_then_not_found() {
    // GIVEN: The API answers 404
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "The resource you were accessing could not be found."
        })))
        .mount(&server)
        .await;

    // WHEN: Fetching
    let error = client_for(&server).get_droplet(999).await.unwrap_err();

    // THEN: 404 with the status-line message (body has no `errors` list)
    assert!(error.is_not_found());
    assert_eq!(error.message(), "HTTP 404: Not Found");
}

// ----------------------------------------------------------------------------
// create / delete
// ----------------------------------------------------------------------------

/// **VALUE**: Proves the create body carries required fields, omits unset options and keeps
/// tag order through the round trip.
///
/// **WHY THIS MATTERS**: Sending `"backups": null` or reordering tags changes what the API does.
///
/// **BUG THIS CATCHES**: Would catch a serializer change that emits nulls for unset options,
/// or a numeric image slug being sent as a string.
#[tokio::test]
async fn given_create_request_when_sent_then_body_matches_and_tags_round_trip() {
    // GIVEN: A mock expecting the exact body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(body_json(json!({
            "name": "web-1",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "tags": ["a", "b"]
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"droplet": droplet_json(42, "web-1", &["a", "b"])})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateDropletRequest::builder()
        .with_name("web-1")
        .with_region("nyc3")
        .with_size("s-1vcpu-1gb")
        .with_image("ubuntu-24-04-x64")
        .with_tags(["a", "b"])
        .build()
        .expect("valid request");

    // WHEN: Creating
    let droplet = client_for(&server)
        .create_droplet(&request)
        .await
        .expect("create");

    // THEN: Returned droplet keeps tag order
    assert_eq!(droplet.id, 42);
    assert_eq!(droplet.tags, vec!["a", "b"]);
}

#[tokio::test]
async fn given_numeric_image_when_created_then_sent_as_number() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(body_json(json!({
            "name": "web-2",
            "region": "ams3",
            "size": "s-1vcpu-1gb",
            "image": 12345,
            "backups": true,
            "ipv6": true
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"droplet": droplet_json(43, "web-2", &[])})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateDropletRequest::builder()
        .with_name("web-2")
        .with_region("ams3")
        .with_size("s-1vcpu-1gb")
        .with_image("12345")
        .with_backups(true)
        .with_ipv6(true)
        .build()
        .expect("valid request");

    let droplet = client_for(&server).create_droplet(&request).await.expect("create");

    assert_eq!(droplet.id, 43);
}

#[tokio::test]
async fn given_204_when_delete_droplet_then_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).delete_droplet(42).await;

    assert!(result.is_ok(), "204 with empty body should succeed: {result:?}");
}

// ----------------------------------------------------------------------------
// power actions
// ----------------------------------------------------------------------------

/// **VALUE**: Each power action posts its own `type` to the actions endpoint.
///
/// **BUG THIS CATCHES**: Would catch `PowerOff` serializing as `poweroff` or `PowerOff`,
/// which the API rejects with 422.
#[tokio::test]
async fn given_droplet_when_power_actions_requested_then_posts_matching_type() {
    // GIVEN: One mock per action type
    let server = MockServer::start().await;
    for (action_type, action_id) in [("reboot", 1), ("power_off", 2), ("power_on", 3)] {
        Mock::given(method("POST"))
            .and(path("/v2/droplets/42/actions"))
            .and(body_json(json!({"type": action_type})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(action_json(action_id, action_type, 42)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);

    // WHEN: Requesting each action
    let reboot = client.reboot_droplet(42).await.expect("reboot");
    let power_off = client.power_off_droplet(42).await.expect("power off");
    let power_on = client.power_on_droplet(42).await.expect("power on");

    // THEN: Each returns its action
    assert_eq!(reboot.action_type, "reboot");
    assert_eq!(power_off.action_type, "power_off");
    assert_eq!(power_on.action_type, "power_on");
    assert_eq!(power_on.resource_id, 42);
    assert_eq!(power_on.completed_at, None);
}
