//! Transport error taxonomy

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Server-side field errors: payload field name → one or more messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors surfaced by the transport client.
///
/// Every request resolves to exactly one of these; the client never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the submission with structured per-field errors.
    #[error("the server rejected the submission")]
    ValidationRejected(FieldErrors),

    /// The request could not reach the server at all.
    #[error("cannot reach the backend server: {0}")]
    NetworkUnavailable(String),

    /// A response arrived but its body was not what the contract promises.
    #[error("unexpected response from the backend: {0}")]
    UnexpectedResponse(String),
}

/// One message or a list of messages, as Django-style error bodies use both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(message) => vec![message],
            OneOrMany::Many(messages) => messages,
        }
    }
}

/// Try to decode a non-success body as a field → message(s) mapping.
///
/// Returns `None` when the body is not such a mapping (or maps to nothing),
/// in which case the caller falls back to [`ApiError::UnexpectedResponse`].
pub fn decode_field_errors(body: &str) -> Option<FieldErrors> {
    let raw: BTreeMap<String, OneOrMany> = serde_json::from_str(body).ok()?;
    if raw.is_empty() {
        return None;
    }
    Some(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_array_messages() {
        let errors = decode_field_errors(r#"{"email": ["Enter a valid email."]}"#).unwrap();
        assert_eq!(errors["email"], vec!["Enter a valid email.".to_string()]);
    }

    #[test]
    fn decodes_single_string_messages() {
        let errors = decode_field_errors(r#"{"amount": "Must be positive."}"#).unwrap();
        assert_eq!(errors["amount"], vec!["Must be positive.".to_string()]);
    }

    #[test]
    fn decodes_mixed_shapes() {
        let body = r#"{"email": ["Enter a valid email."], "detail": "Bad request."}"#;
        let errors = decode_field_errors(body).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["detail"], vec!["Bad request.".to_string()]);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(decode_field_errors("[]").is_none());
        assert!(decode_field_errors("\"oops\"").is_none());
        assert!(decode_field_errors("<html>502</html>").is_none());
    }

    #[test]
    fn rejects_empty_object() {
        assert!(decode_field_errors("{}").is_none());
    }

    #[test]
    fn rejects_nested_values() {
        assert!(decode_field_errors(r#"{"email": {"code": "invalid"}}"#).is_none());
    }

    #[test]
    fn error_display_is_user_safe() {
        let err = ApiError::NetworkUnavailable("connection refused".into());
        assert!(err.to_string().contains("cannot reach"));
    }
}
