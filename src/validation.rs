//! Contact form field rules.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").ok());

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Please enter your email")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    Name,
    Email,
    Phone,
}

impl FieldRule {
    /// Rule keyed by the field's `name` attribute; other fields carry no rule.
    #[inline]
    pub fn for_field(field_name: &str) -> Option<Self> {
        match field_name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    /// Check an already-trimmed value.
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name if value.is_empty() => Err(FieldError::NameMissing),
            Self::Email if value.is_empty() => Err(FieldError::EmailMissing),
            Self::Email if !is_valid_email(value) => Err(FieldError::EmailInvalid),
            Self::Phone if !value.is_empty() && !is_valid_phone(value) => {
                Err(FieldError::PhoneInvalid)
            }
            _ => Ok(()),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Spaces, dashes and parentheses are ignored before matching.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(&digits))
}

pub fn validate_value(field_name: &str, raw: &str) -> Result<(), FieldError> {
    match FieldRule::for_field(field_name) {
        Some(rule) => rule.check(raw.trim()),
        None => Ok(()),
    }
}
