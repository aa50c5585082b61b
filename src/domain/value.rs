use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

/// Pattern a destination number must match in full: an optional `+` with a
/// 1-3 digit country code (optionally followed by a single `-` or space),
/// then exactly ten digits.
const DESTINATION_PATTERN: &str = r"^(\+\d{1,3}[- ]?)?\d{10}$";

static DESTINATION_REGEX: OnceLock<Regex> = OnceLock::new();

fn destination_regex() -> &'static Regex {
    DESTINATION_REGEX.get_or_init(|| Regex::new(DESTINATION_PATTERN).expect("valid regex pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OAuth2 `client_id` issued for the application.
///
/// Invariant: non-empty after trimming.
pub struct ClientId(String);

impl ClientId {
    /// Field name used both in the token form and the credentials file (`client_id`).
    pub const FIELD: &'static str = "client_id";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// OAuth2 `client_secret` issued for the application.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The value is redacted from `Debug` output so the secret cannot leak
/// through diagnostics.
pub struct ClientSecret(String);

impl ClientSecret {
    /// Field name used both in the token form and the credentials file (`client_secret`).
    pub const FIELD: &'static str = "client_secret";

    /// Create a validated [`ClientSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientSecret").field(&"***").finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination mobile number as supplied on the command line (`to`).
///
/// Invariant: the whole input matches the documented mobile-number pattern.
/// The input is kept exactly as given; surrounding whitespace is not stripped
/// and fails validation.
pub struct DestinationNumber(String);

impl DestinationNumber {
    /// JSON field name used by the SMS endpoint (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated [`DestinationNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !destination_regex().is_match(&value) {
            return Err(ValidationError::InvalidNumber { input: value });
        }
        Ok(Self(value))
    }

    /// The number exactly as it was accepted.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text to deliver (`body`).
///
/// Invariant: at most [`MessageText::MAX_CHARS`] characters. There is no
/// lower bound; an empty message is accepted.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the SMS endpoint (`body`).
    pub const FIELD: &'static str = "body";

    /// Maximum message length in characters.
    pub const MAX_CHARS: usize = 1900;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::MessageTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Dedicated sending number assigned by the provisioning endpoint (`from`).
///
/// Invariant: non-empty after trimming. The value arrives from the carrier,
/// so no number-pattern check is applied beyond that.
pub struct SendingNumber(String);

impl SendingNumber {
    /// JSON field name used by the SMS endpoint (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated (non-empty) sending number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed number as used in the message's `from` field.
    pub fn raw(&self) -> &str {
        &self.0
    }
}
