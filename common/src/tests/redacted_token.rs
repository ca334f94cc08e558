use crate::RedactedToken;
use crate::redacted_token::mask_token;

/// **VALUE**: Pins the masking rule for every length class.
///
/// **WHY THIS MATTERS**: Tokens are displayed by `config get` and in error paths.
/// An off-by-one in the threshold leaks characters of short tokens.
///
/// **BUG THIS CATCHES**: Would catch if the `<= 8` boundary moves, or if the head/tail
/// slices overlap for nine-character tokens.
#[test]
fn given_tokens_of_each_length_class_when_masked_then_matches_rule() {
    assert_eq!(mask_token(""), "<not set>");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("abcdefgh"), "***");
    assert_eq!(mask_token("abcdefghi"), "abcd...fghi");
    assert_eq!(mask_token("dop_v1_12345"), "dop_...2345");
}

#[test]
fn given_multibyte_token_when_masked_then_does_not_split_characters() {
    let token = "ééééxxxxüüüü";

    assert_eq!(mask_token(token), "éééé...üüüü");
}

/// **VALUE**: Verifies Debug output never contains the raw token.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual Debug impl with
/// `#[derive(Debug)]`, which would print the token whenever a config is logged.
#[test]
fn given_token_when_debug_formatted_then_value_is_hidden() {
    let token = RedactedToken::new("dop_v1_supersecretvalue");

    let debug = format!("{token:?}");

    assert!(!debug.contains("supersecret"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_when_displayed_then_shows_masked_form() {
    let token = RedactedToken::from("dop_v1_supersecretvalue");

    assert_eq!(token.to_string(), "dop_...alue");
    assert_eq!(token.as_str(), "dop_v1_supersecretvalue");
}

#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedToken::new("dop_v1_supersecretvalue");

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Tokens must not be serializable");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("as_str()"));
    assert!(!message.contains("supersecret"));
}
