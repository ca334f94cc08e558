//! Shared fixtures for client integration tests.

use do_client::{ClientConfig, DigitalOceanClient};

use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "dop_v1_integrationtesttoken";

/// Client pointed at the mock server with [`TEST_TOKEN`].
pub fn client_for(server: &MockServer) -> DigitalOceanClient {
    client_with_token(server, TEST_TOKEN)
}

pub fn client_with_token(server: &MockServer, token: &str) -> DigitalOceanClient {
    let config = ClientConfig::new(token, &server.uri()).expect("mock server URI is valid");
    DigitalOceanClient::new(config).expect("Failed to build client")
}

/// Minimal droplet JSON as the API returns it.
pub fn droplet_json(id: u64, name: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": "active",
        "created_at": "2024-03-01T12:34:56Z",
        "features": ["monitoring"],
        "backup_ids": [],
        "snapshot_ids": [],
        "image": {
            "id": 12345,
            "name": "24.04 (LTS) x64",
            "type": "base",
            "distribution": "Ubuntu",
            "slug": "ubuntu-24-04-x64",
            "public": true,
            "regions": ["nyc3"],
            "min_disk_size": 15,
            "size_gigabytes": 2.36,
            "created_at": "2024-01-01T00:00:00Z"
        },
        "size_slug": "s-1vcpu-1gb",
        "networks": {
            "v4": [
                {"ip_address": "10.10.0.2", "netmask": "255.255.0.0", "gateway": "10.10.0.1", "type": "private"},
                {"ip_address": "203.0.113.10", "netmask": "255.255.240.0", "gateway": "203.0.113.1", "type": "public"}
            ],
            "v6": []
        },
        "region": {
            "name": "New York 3",
            "slug": "nyc3",
            "features": ["backups", "ipv6"],
            "available": true,
            "sizes": ["s-1vcpu-1gb"]
        },
        "tags": tags,
        "volume_ids": [],
        "vpc_uuid": "5a4981aa-9653-4bd1-bef5-d6bff52042e4"
    })
}

pub fn action_json(id: u64, action_type: &str, droplet_id: u64) -> Value {
    json!({
        "action": {
            "id": id,
            "status": "in-progress",
            "type": action_type,
            "started_at": "2024-03-01T12:40:00Z",
            "completed_at": null,
            "resource_id": droplet_id,
            "resource_type": "droplet",
            "region_slug": "nyc3"
        }
    })
}
