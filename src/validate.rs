//! Client-side field validation
//!
//! Stateless rule evaluation over a form draft. Rules are declared per form
//! in [`crate::submit`] and checked here before any network call is made.

use std::collections::BTreeMap;

/// A snapshot of one field's value, taken from the form at submit time.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue {
    Text(String),
    /// `None` when the field is empty or not a parseable number.
    Number(Option<f64>),
    Flag(bool),
    List(Vec<String>),
}

impl DraftValue {
    fn is_empty(&self) -> bool {
        match self {
            DraftValue::Text(s) => s.trim().is_empty(),
            DraftValue::Number(n) => n.is_none(),
            DraftValue::Flag(_) => false,
            DraftValue::List(items) => items.is_empty(),
        }
    }
}

/// Field name → value snapshot.
pub type FormDraft = BTreeMap<String, DraftValue>;

/// Field name → error message. Empty means the draft is valid.
pub type ValidationResult = BTreeMap<String, String>;

/// Validation rule for a single field.
///
/// Checks run in order: required, email shape, numeric minimum. The first
/// failing check supplies the field's message.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    /// Message when the field is missing or empty.
    pub required: Option<&'static str>,
    /// Message when the value is not a plausible email address.
    pub email: Option<&'static str>,
    /// Minimum numeric value and the message when below it.
    pub min: Option<(f64, &'static str)>,
}

/// Evaluate `rules` against `draft`. Never panics; a field absent from the
/// draft counts as empty.
pub fn validate(draft: &FormDraft, rules: &[FieldRule]) -> ValidationResult {
    let mut errors = ValidationResult::new();

    for rule in rules {
        let value = draft.get(rule.field);
        let empty = value.is_none_or(DraftValue::is_empty);

        if let Some(message) = rule.required {
            if empty {
                errors.insert(rule.field.to_string(), message.to_string());
                continue;
            }
        }

        if let Some(message) = rule.email {
            let ok = matches!(value, Some(DraftValue::Text(s)) if is_valid_email(s.trim()));
            if !ok {
                errors.insert(rule.field.to_string(), message.to_string());
                continue;
            }
        }

        if let Some((min, message)) = rule.min {
            let ok = matches!(value, Some(DraftValue::Number(Some(n))) if *n >= min);
            if !ok {
                errors.insert(rule.field.to_string(), message.to_string());
            }
        }
    }

    errors
}

/// Simple `local@domain.tld` shape check, equivalent to the frontend's
/// `/^[^\s@]+@[^\s@]+\.[^\s@]+$/`.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}
