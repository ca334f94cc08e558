use crate::{CreateDropletRequest, ImageRef, ModelError};

fn complete_builder() -> crate::CreateDropletRequestBuilder {
    CreateDropletRequest::builder()
        .with_name("web-01")
        .with_region("nyc3")
        .with_size("s-1vcpu-1gb")
        .with_image("ubuntu-24-04-x64")
}

/// **VALUE**: Verifies that the builder rejects a missing name.
///
/// **WHY THIS MATTERS**: The API rejects droplets without names, but only after a
/// network round-trip. Required-field presence is the one check done locally.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The required-field check for name is removed
/// - The builder silently substitutes an empty string
#[test]
fn given_missing_name_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a name
    let builder = CreateDropletRequest::builder()
        .with_region("nyc3")
        .with_size("s-1vcpu-1gb")
        .with_image("ubuntu-24-04-x64");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the field
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Name is required");
        }
    }
}

/// **VALUE**: Verifies that whitespace-only required fields are treated as empty.
///
/// **BUG THIS CATCHES**: Would catch if `--region " "` from a shell script slips
/// through to the API as a region slug.
#[test]
fn given_blank_region_when_building_then_returns_validation_error() {
    // GIVEN: Builder with a blank region
    let builder = complete_builder().with_region("   ");

    // WHEN: Attempting to build
    let err = builder.build().unwrap_err();

    // THEN: Should report the empty field
    assert_eq!(err.message(), "Region cannot be empty");
}

#[test]
fn given_missing_image_when_building_then_returns_validation_error() {
    let err = CreateDropletRequest::builder()
        .with_name("web-01")
        .with_region("nyc3")
        .with_size("s-1vcpu-1gb")
        .build()
        .unwrap_err();

    assert_eq!(err.message(), "Image is required");
    assert!(err.to_string().contains("builder.rs"));
}

/// **VALUE**: Verifies that unset optional fields are omitted from the JSON body.
///
/// **WHY THIS MATTERS**: Sending `"tags": null` or `"backups": null` is not the same
/// as leaving them out; the API applies its own defaults only to absent keys.
///
/// **BUG THIS CATCHES**: Would catch if `skip_serializing_if` is removed from any
/// optional field, or if empty tag lists are sent as `[]`.
#[test]
fn given_only_required_fields_when_serialized_then_optional_keys_are_absent() {
    // GIVEN: A request with only required fields
    let request = complete_builder().with_tags(Vec::<String>::new()).build().unwrap();

    // WHEN: Serializing to JSON
    let json = serde_json::to_value(&request).unwrap();

    // THEN: Only the four required keys are present
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(json["name"], "web-01");
    assert_eq!(json["image"], "ubuntu-24-04-x64");
    assert!(object.get("tags").is_none());
    assert!(object.get("backups").is_none());
}

#[test]
fn given_all_options_when_built_then_fields_are_carried_in_order() {
    let request = complete_builder()
        .with_tags(["a", "b"])
        .with_ssh_keys(["12345"])
        .with_backups(true)
        .with_ipv6(false)
        .with_monitoring(true)
        .with_user_data("#cloud-config")
        .with_vpc_uuid("vpc-1")
        .build()
        .unwrap();

    assert_eq!(request.tags, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(request.ssh_keys, Some(vec!["12345".to_string()]));
    assert_eq!(request.backups, Some(true));
    assert_eq!(request.ipv6, Some(false));
    assert_eq!(request.monitoring, Some(true));
    assert_eq!(request.image, ImageRef::Slug("ubuntu-24-04-x64".to_string()));

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
    assert_eq!(json["ipv6"], false);
}
