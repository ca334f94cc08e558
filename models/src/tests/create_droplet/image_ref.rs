use crate::ImageRef;

#[test]
fn given_numeric_input_when_converted_then_becomes_image_id() {
    assert_eq!(ImageRef::from("12345"), ImageRef::Id(12345));
    assert_eq!(serde_json::to_value(ImageRef::from("12345")).unwrap(), 12345);
}

#[test]
fn given_slug_input_when_converted_then_stays_a_string() {
    let image = ImageRef::from("ubuntu-24-04-x64");

    assert_eq!(image, ImageRef::Slug("ubuntu-24-04-x64".to_string()));
    assert_eq!(serde_json::to_value(&image).unwrap(), "ubuntu-24-04-x64");
    assert_eq!(image.to_string(), "ubuntu-24-04-x64");
}

#[test]
fn given_empty_slug_when_checked_then_is_empty() {
    assert!(ImageRef::from("").is_empty());
    assert!(!ImageRef::Id(0).is_empty());
}
