use crate::{Droplet, DropletFilter};

use serde_json::json;

fn droplet_fixture() -> serde_json::Value {
    json!({
        "id": 3164444,
        "name": "example.com",
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": "active",
        "kernel": null,
        "created_at": "2020-07-21T18:37:44Z",
        "features": ["backups", "ipv6"],
        "backup_ids": [53893572],
        "snapshot_ids": [],
        "image": {
            "id": 63663980,
            "name": "20.04 (LTS) x64",
            "distribution": "Ubuntu",
            "slug": "ubuntu-20-04-x64",
            "public": true,
            "regions": ["nyc3"],
            "created_at": "2020-05-15T05:47:50Z",
            "type": "base",
            "min_disk_size": 20,
            "size_gigabytes": 2.36
        },
        "size": {
            "slug": "s-1vcpu-1gb",
            "memory": 1024,
            "vcpus": 1,
            "disk": 25,
            "transfer": 1.0,
            "price_monthly": 5.0,
            "price_hourly": 0.00743999984115362,
            "regions": ["nyc3"],
            "available": true
        },
        "size_slug": "s-1vcpu-1gb",
        "networks": {
            "v4": [
                {"ip_address": "10.128.192.124", "netmask": "255.255.0.0", "gateway": "nil", "type": "private"},
                {"ip_address": "192.241.165.154", "netmask": "255.255.240.0", "gateway": "192.241.160.1", "type": "public"}
            ],
            "v6": [
                {"ip_address": "2604:a880:0:1010::18a:a001", "netmask": 64, "gateway": "2604:a880:0:1010::1", "type": "public"}
            ]
        },
        "region": {
            "name": "New York 3",
            "slug": "nyc3",
            "features": ["backups", "ipv6", "metadata"],
            "available": true,
            "sizes": ["s-1vcpu-1gb"]
        },
        "tags": ["web", "env:prod"],
        "volume_ids": [],
        "vpc_uuid": "760e09ef-dc84-11e8-981e-3cfdfeaae000"
    })
}

/// **VALUE**: Verifies a full API droplet payload decodes into the typed model.
///
/// **WHY THIS MATTERS**: Every droplet command depends on this decode step. A
/// mismatched field type (e.g. IPv6 netmask as string) makes the whole response
/// undecodable and surfaces as "invalid response" to users.
///
/// **BUG THIS CATCHES**: Would catch renamed `type` fields, wrong numeric types,
/// and `null` kernels failing to map to `None`.
#[test]
fn given_api_droplet_payload_when_decoded_then_all_nested_values_are_present() {
    // GIVEN: A droplet as the API returns it
    let payload = droplet_fixture();

    // WHEN: Decoding
    let droplet: Droplet = serde_json::from_value(payload).unwrap();

    // THEN: Nested value objects are populated
    assert_eq!(droplet.id, 3164444);
    assert!(droplet.kernel.is_none());
    assert_eq!(droplet.image.as_ref().unwrap().image_type, "base");
    assert_eq!(droplet.size.as_ref().unwrap().price_monthly, 5.0);
    let networks = droplet.networks.as_ref().unwrap();
    assert_eq!(networks.v4.len(), 2);
    assert_eq!(networks.v6[0].netmask, 64);
    assert_eq!(droplet.tags, vec!["web", "env:prod"]);
}

#[test]
fn given_droplet_with_private_and_public_networks_when_public_ipv4_then_returns_public() {
    let droplet: Droplet = serde_json::from_value(droplet_fixture()).unwrap();

    assert_eq!(droplet.public_ipv4(), Some("192.241.165.154"));
    assert_eq!(droplet.region_slug(), Some("nyc3"));
    assert_eq!(droplet.created_date(), "2020-07-21");
}

/// **VALUE**: Verifies that minimal payloads still decode.
///
/// **BUG THIS CATCHES**: Would catch a newly added field missing `#[serde(default)]`,
/// which would break decoding of droplets still being provisioned (no networks,
/// no region object yet).
#[test]
fn given_minimal_droplet_payload_when_decoded_then_defaults_fill_the_rest() {
    let droplet: Droplet =
        serde_json::from_value(json!({"id": 7, "name": "new", "status": "new"})).unwrap();

    assert!(droplet.networks.is_none());
    assert_eq!(droplet.public_ipv4(), None);
    assert_eq!(droplet.region_slug(), None);
    assert_eq!(droplet.created_date(), "");
    assert!(droplet.tags.is_empty());
}

#[test]
fn given_blank_tag_when_query_pairs_built_then_tag_omitted() {
    let filter = DropletFilter {
        tag: Some(String::from("  ")),
        page: None,
        per_page: Some(100),
    };

    assert_eq!(filter.query_pairs(), vec![("per_page", String::from("100"))]);
}

#[test]
fn given_tag_only_when_query_pairs_built_then_tag_name_sent() {
    let filter = DropletFilter::default().with_tag("production");

    assert_eq!(filter.query_pairs(), vec![("tag_name", String::from("production"))]);
}
