use crate::error::CliError;

use do_client::{ClientError, ConfigError};

use common::HttpStatusCode;

/// **VALUE**: The stderr line shows the API's own message, not the debug rendering.
///
/// **WHY THIS MATTERS**: `Error: <message>` is the only thing users see on failure.
///
/// **BUG THIS CATCHES**: Would catch `message()` falling back to `Display`, which appends
/// source locations meant for logs.
#[test]
fn given_wrapped_client_error_when_message_then_passes_through_api_message() {
    // GIVEN: A client error from a 422
    let client_error = ClientError::from_response(
        HttpStatusCode(422),
        "Unprocessable Entity",
        r#"{"errors":[{"id":"e1","message":"bad size"}]}"#,
    );

    // WHEN: Wrapped into a CLI error
    let error = CliError::from(client_error);

    // THEN: Bare message, no location
    assert_eq!(error.message(), "bad size");
    assert!(error.to_string().contains("API Error"));
}

#[test]
fn given_io_error_when_converted_then_output_variant() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let error = CliError::from(io_error);

    assert!(matches!(error, CliError::Output { .. }));
    assert_eq!(error.message(), "pipe closed");
}

#[test]
fn given_usage_error_when_displayed_then_includes_kind_and_location() {
    let error = CliError::usage("Unknown config key: x");

    let display = error.to_string();

    assert!(display.starts_with("Usage Error: Unknown config key: x ["));
    assert_eq!(error.message(), "Unknown config key: x");
}

#[test]
fn given_config_error_when_wrapped_then_transparent() {
    let error = CliError::from(ConfigError::validation("Invalid base URL 'x'"));

    assert_eq!(error.message(), "Invalid base URL 'x'");
}
