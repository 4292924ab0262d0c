use crate::error::{QrError, Result};
use regex::Regex;
use std::sync::LazyLock;

// ASCII whitespace only; the payload is an ASCII string.
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 \t\n\r\x0B\x0C]*$").expect("alphanumeric pattern"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("number pattern"));
static ALPHANUMERIC_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9+_.-]*$").expect("alphanumeric-special pattern"));
static EXPIRY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{8}|[0-9]{14})$").expect("expiry date pattern"));

/// Character class a parameter must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind<'a> {
    /// ASCII letters, digits and whitespace.
    Alphanumeric,
    /// Digits with an optional fraction of one or two digits.
    Number,
    /// Letters, digits and `+_.-`.
    AlphanumericSpecial,
    /// `YYYYMMDD` or `YYYYMMDDHHMMSS`, later than `now` (`YYYYMMDDHHMMSS`).
    ExpiryDate { now: &'a str },
    /// Any text.
    Text,
}

impl ParamKind<'_> {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Alphanumeric => ALPHANUMERIC.is_match(value),
            Self::Number => NUMBER.is_match(value),
            Self::AlphanumericSpecial => ALPHANUMERIC_SPECIAL.is_match(value),
            // Plain string comparison; both sides are fixed-width digit strings.
            Self::ExpiryDate { now } => EXPIRY_DATE.is_match(value) && value > *now,
            Self::Text => true,
        }
    }
}

/// Checks `value` against `kind` and `max_length`.
///
/// An absent value passes untouched, which is how optional fields are
/// handled. The character class is checked before the length.
pub fn validate_param<'v>(
    param: &str,
    value: Option<&'v str>,
    max_length: usize,
    kind: ParamKind<'_>,
) -> Result<Option<&'v str>> {
    let Some(value) = value else {
        return Ok(None);
    };

    if !kind.accepts(value) {
        return Err(QrError::InvalidValue {
            param: param.to_string(),
            value: value.to_string(),
        });
    }

    if value.chars().count() > max_length {
        return Err(QrError::ExceededLength {
            param: param.to_string(),
            value: value.to_string(),
        });
    }

    Ok(Some(value))
}
