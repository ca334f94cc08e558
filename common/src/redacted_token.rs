//! API token handling with masked display.
//!
//! The raw value is only reachable through [`RedactedToken::as_str`], which the
//! request wrapper uses for the `Authorization` header and the config writer
//! uses when persisting. Everything user-facing goes through
//! [`RedactedToken::masked`].

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Shown in place of a token that was never configured.
pub const TOKEN_NOT_SET: &str = "<not set>";

/// Shown in place of tokens too short to reveal any characters of.
pub const TOKEN_SHORT_MASK: &str = "***";

/// Number of characters revealed at each end of a long token.
const VISIBLE_CHARS: usize = 4;

/// A DigitalOcean API token that never exposes its value in logs or debug output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RedactedToken {
    inner: String,
}

impl RedactedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Get the actual token value.
    ///
    /// # Security Note
    /// Only call this when sending the token to the API or writing the config file.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Masked form for display: `<not set>`, `***`, or `abcd...wxyz`.
    pub fn masked(&self) -> String {
        mask_token(&self.inner)
    }
}

/// Mask a token for display.
///
/// Empty tokens render as `<not set>`, tokens of at most eight characters as
/// `***`, and longer tokens as their first and last four characters joined
/// by `...`.
pub fn mask_token(token: &str) -> String {
    let length = token.chars().count();

    if length == 0 {
        return TOKEN_NOT_SET.to_string();
    }

    if length <= VISIBLE_CHARS * 2 {
        return TOKEN_SHORT_MASK.to_string();
    }

    let head: String = token.chars().take(VISIBLE_CHARS).collect();
    let tail: String = token.chars().skip(length - VISIBLE_CHARS).collect();

    format!("{head}...{tail}")
}

impl From<String> for RedactedToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for RedactedToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedToken([REDACTED])")
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Drop for RedactedToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedToken {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedToken cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::caller(),
        }))
    }
}
