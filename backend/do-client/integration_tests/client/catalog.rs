use crate::helpers::client_for;

use models::ImageFilter;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_image_filter_when_list_images_then_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/images"))
        .and(query_param("type", "distribution"))
        .and(query_param("private", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [{
                "id": 7,
                "name": "my-snapshot",
                "type": "snapshot",
                "distribution": "Ubuntu",
                "public": false,
                "regions": ["nyc3"],
                "min_disk_size": 25,
                "size_gigabytes": 1.5,
                "created_at": "2024-02-01T00:00:00Z"
            }],
            "meta": {"total": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ImageFilter {
        image_type: Some(String::from("distribution")),
        private: true,
    };

    let images = client_for(&server).list_images(&filter).await.expect("list");

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].slug, None);
}

#[tokio::test]
async fn given_default_filter_when_list_images_then_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": []})))
        .mount(&server)
        .await;

    client_for(&server)
        .list_images(&ImageFilter::default())
        .await
        .expect("list");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn given_regions_and_sizes_when_listed_then_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "regions": [{"name": "New York 3", "slug": "nyc3", "features": [], "available": true, "sizes": []}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/sizes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sizes": [{
                "slug": "s-1vcpu-1gb", "memory": 1024, "vcpus": 1, "disk": 25, "transfer": 1.0,
                "price_monthly": 6.0, "price_hourly": 0.00893, "regions": ["nyc3"],
                "available": true, "description": "Basic"
            }]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let regions = client.list_regions().await.expect("regions");
    let sizes = client.list_sizes().await.expect("sizes");

    assert_eq!(regions[0].slug, "nyc3");
    assert_eq!(sizes[0].memory, 1024);
}
