use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const WWW_PREFIX: &str = "www.";
const MAX_LABEL_LEN: usize = 63;

/// A sanitized hostname: lowercase ASCII labels joined by dots, at least two labels,
/// without a leading `www.`.
///
/// The only way to obtain one is through [`sanitize_domain`] (or `FromStr`), so holding
/// a `Domain` means the value already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(Arc<str>);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        sanitize_domain(s).ok_or_else(|| DomainError::InvalidDomainName(s.to_string()))
    }
}

/// Strips an optional leading `www.` (case-sensitive) and validates the remainder.
///
/// Returns the canonical lowercase form, or `None` when the input must not be used.
pub fn sanitize_domain(input: &str) -> Option<Domain> {
    if input.is_empty() {
        return None;
    }

    let candidate = input.strip_prefix(WWW_PREFIX).unwrap_or(input);
    if !is_valid_hostname(candidate) {
        return None;
    }

    Some(Domain(Arc::from(candidate.to_ascii_lowercase())))
}

pub fn validate_domain(input: &str) -> bool {
    sanitize_domain(input).is_some()
}

fn is_valid_hostname(candidate: &str) -> bool {
    let mut labels = 0usize;
    for label in candidate.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
