//! Per-form submission configuration
//!
//! Each form maps to one [`FormSpec`]: its endpoint, validation rules, the
//! payload-key aliases the server knows it by, and its failure copy. The
//! generic flow in [`crate::app::App::submit_form`] reads everything from
//! here so no form carries its own submission code.

use serde_json::{json, Value};

use crate::api::endpoints;
use crate::validate::{DraftValue, FieldRule, FormDraft};

/// Alert shown when the backend cannot be reached at all
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error: Cannot reach the backend server. Check that it is running and reachable.";

/// The four submittable forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Donation,
    Volunteer,
    Contact,
    Newsletter,
}

/// Static submission configuration for one form
pub struct FormSpec {
    pub endpoint: &'static str,
    pub rules: &'static [FieldRule],
    /// Server payload key → local field name, for surfacing server-side
    /// errors on the right field.
    pub aliases: &'static [(&'static str, &'static str)],
    pub generic_failure: &'static str,
    /// Whether a successful submission schedules a return to the home view
    pub returns_home: bool,
}

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

const DONATION_RULES: &[FieldRule] = &[
    FieldRule {
        field: "full_name",
        required: Some("Please enter your full name"),
        email: None,
        min: None,
    },
    FieldRule {
        field: "email",
        required: Some(EMAIL_MESSAGE),
        email: Some(EMAIL_MESSAGE),
        min: None,
    },
];

const VOLUNTEER_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        required: Some("Please enter your name"),
        email: None,
        min: None,
    },
    FieldRule {
        field: "email",
        required: Some(EMAIL_MESSAGE),
        email: Some(EMAIL_MESSAGE),
        min: None,
    },
    FieldRule {
        field: "age",
        required: Some("You must be at least 18 years old"),
        email: None,
        min: Some((18.0, "You must be at least 18 years old")),
    },
];

const CONTACT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        required: Some("Please enter your name"),
        email: None,
        min: None,
    },
    FieldRule {
        field: "email",
        required: Some(EMAIL_MESSAGE),
        email: Some(EMAIL_MESSAGE),
        min: None,
    },
    FieldRule {
        field: "message",
        required: Some("Please enter your message"),
        email: None,
        min: None,
    },
];

const NEWSLETTER_RULES: &[FieldRule] = &[FieldRule {
    field: "email",
    required: Some(EMAIL_MESSAGE),
    email: Some(EMAIL_MESSAGE),
    min: None,
}];

const DONATION_ALIASES: &[(&str, &str)] = &[
    ("donor_name", "full_name"),
    ("donor_email", "email"),
    ("donor_phone", "phone"),
    ("is_anonymous", "anonymous"),
];

impl FormKind {
    pub fn spec(&self) -> FormSpec {
        match self {
            FormKind::Donation => FormSpec {
                endpoint: endpoints::DONATIONS,
                rules: DONATION_RULES,
                aliases: DONATION_ALIASES,
                generic_failure: "Failed to process donation. Please try again.",
                returns_home: true,
            },
            FormKind::Volunteer => FormSpec {
                endpoint: endpoints::VOLUNTEERS,
                rules: VOLUNTEER_RULES,
                aliases: &[],
                generic_failure:
                    "Failed to submit application. Please check your network connection and try again.",
                returns_home: true,
            },
            FormKind::Contact => FormSpec {
                endpoint: endpoints::CONTACT_MESSAGES,
                rules: CONTACT_RULES,
                aliases: &[],
                generic_failure: "Failed to send message. Please try again later.",
                returns_home: true,
            },
            FormKind::Newsletter => FormSpec {
                endpoint: endpoints::NEWSLETTER_SUBSCRIBE,
                rules: NEWSLETTER_RULES,
                aliases: &[],
                generic_failure: "Failed to subscribe. Please try again.",
                returns_home: false,
            },
        }
    }
}

impl FormSpec {
    /// Translate a server payload key back to the local field name.
    pub fn local_field_for<'a>(&self, payload_key: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(key, _)| *key == payload_key)
            .map_or(payload_key, |(_, local)| local)
    }
}

fn text(draft: &FormDraft, field: &str) -> String {
    match draft.get(field) {
        Some(DraftValue::Text(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn number(draft: &FormDraft, field: &str) -> Option<f64> {
    match draft.get(field) {
        Some(DraftValue::Number(n)) => *n,
        _ => None,
    }
}

fn flag(draft: &FormDraft, field: &str) -> bool {
    matches!(draft.get(field), Some(DraftValue::Flag(true)))
}

fn list(draft: &FormDraft, field: &str) -> Vec<String> {
    match draft.get(field) {
        Some(DraftValue::List(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Build the JSON payload the backend expects for `kind` from a validated
/// draft.
pub fn shape_payload(kind: FormKind, draft: &FormDraft) -> Value {
    match kind {
        FormKind::Donation => json!({
            "donor_name": text(draft, "full_name"),
            "donor_email": text(draft, "email"),
            "donor_phone": text(draft, "phone"),
            "amount": number(draft, "amount"),
            "payment_method": text(draft, "payment_method"),
            "donation_type": text(draft, "donation_type"),
            "is_anonymous": flag(draft, "anonymous"),
        }),
        FormKind::Volunteer => {
            let start_date = text(draft, "start_date");
            json!({
                "name": text(draft, "name"),
                "email": text(draft, "email"),
                "age": number(draft, "age").map(|n| n as i64),
                "phone": text(draft, "phone"),
                "occupation": text(draft, "occupation"),
                "skills": text(draft, "skills"),
                "interests": list(draft, "interests"),
                "availability": list(draft, "availability"),
                "commitment_level": text(draft, "commitment_level"),
                "motivation": text(draft, "motivation"),
                "start_date": if start_date.is_empty() {
                    Value::Null
                } else {
                    Value::String(start_date)
                },
            })
        }
        FormKind::Contact => {
            let subject = text(draft, "subject");
            json!({
                "name": text(draft, "name"),
                "email": text(draft, "email"),
                "subject": if subject.is_empty() {
                    "General Inquiry".to_string()
                } else {
                    subject
                },
                "message": text(draft, "message"),
                "phone": text(draft, "phone"),
            })
        }
        FormKind::Newsletter => json!({
            "email": text(draft, "email"),
        }),
    }
}

/// Confirmation copy after a successful submission.
pub fn success_message(kind: FormKind, draft: &FormDraft) -> String {
    match kind {
        FormKind::Donation => {
            let amount = number(draft, "amount").unwrap_or(0.0);
            format!("Thank you for your donation of ${amount:.2}! Your support makes a difference.")
        }
        FormKind::Volunteer => {
            "Thank you for your volunteer application! We will contact you soon.".to_string()
        }
        FormKind::Contact => "Thank you for your message! We will respond soon.".to_string(),
        FormKind::Newsletter => "Thank you for subscribing to our newsletter!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{DonationForm, Form, VolunteerForm};
    use crate::validate::validate;

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn blank_donation_fails_name_and_email_only() {
            let draft = DonationForm::new().draft();
            let errors = validate(&draft, FormKind::Donation.spec().rules);
            assert_eq!(errors.len(), 2);
            assert!(errors.contains_key("full_name"));
            assert!(errors.contains_key("email"));
        }

        #[test]
        fn donation_with_only_a_missing_name_reports_exactly_one_error() {
            let mut form = DonationForm::new();
            form.email.set_text("a@b.com");
            let errors = validate(&form.draft(), FormKind::Donation.spec().rules);
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get("full_name").map(String::as_str),
                Some("Please enter your full name")
            );
        }

        #[test]
        fn underage_volunteer_is_rejected_locally() {
            let mut form = VolunteerForm::new();
            form.name.set_text("Ada");
            form.email.set_text("ada@example.org");
            form.age.set_text("17");
            let errors = validate(&form.draft(), FormKind::Volunteer.spec().rules);
            assert_eq!(
                errors.get("age").map(String::as_str),
                Some("You must be at least 18 years old")
            );
        }

        #[test]
        fn adult_volunteer_passes_the_age_rule() {
            let mut form = VolunteerForm::new();
            form.name.set_text("Ada");
            form.email.set_text("ada@example.org");
            form.age.set_text("18");
            assert!(validate(&form.draft(), FormKind::Volunteer.spec().rules).is_empty());
        }

        #[test]
        fn newsletter_requires_a_shaped_email() {
            let errors = validate(
                &[("email".to_string(), DraftValue::Text("nope".into()))]
                    .into_iter()
                    .collect(),
                FormKind::Newsletter.spec().rules,
            );
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Please enter a valid email address")
            );
        }
    }

    mod payloads {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn donation_payload_uses_donor_keys() {
            let mut form = DonationForm::new();
            form.full_name.set_text("Ada Lovelace");
            form.email.set_text("ada@example.org");
            form.anonymous.toggle();
            let payload = shape_payload(FormKind::Donation, &form.draft());
            assert_eq!(payload["donor_name"], "Ada Lovelace");
            assert_eq!(payload["donor_email"], "ada@example.org");
            assert_eq!(payload["amount"], 25.0);
            assert_eq!(payload["is_anonymous"], true);
            assert_eq!(payload["payment_method"], "credit_card");
        }

        #[test]
        fn volunteer_age_is_an_integer_and_empty_start_date_is_null() {
            let mut form = VolunteerForm::new();
            form.name.set_text("Ada");
            form.email.set_text("ada@example.org");
            form.age.set_text("30");
            let payload = shape_payload(FormKind::Volunteer, &form.draft());
            assert_eq!(payload["age"], 30);
            assert_eq!(payload["start_date"], Value::Null);
            assert_eq!(payload["interests"], json!([]));
        }

        #[test]
        fn volunteer_start_date_is_kept_when_present() {
            let mut form = VolunteerForm::new();
            form.start_date.set_text("2026-09-01");
            let payload = shape_payload(FormKind::Volunteer, &form.draft());
            assert_eq!(payload["start_date"], "2026-09-01");
        }

        #[test]
        fn empty_contact_subject_defaults_to_general_inquiry() {
            let draft: FormDraft = [
                ("name".to_string(), DraftValue::Text("Ada".into())),
                ("email".to_string(), DraftValue::Text("a@b.com".into())),
                ("subject".to_string(), DraftValue::Text("  ".into())),
                ("message".to_string(), DraftValue::Text("Hello".into())),
                ("phone".to_string(), DraftValue::Text(String::new())),
            ]
            .into_iter()
            .collect();
            let payload = shape_payload(FormKind::Contact, &draft);
            assert_eq!(payload["subject"], "General Inquiry");
        }

        #[test]
        fn newsletter_payload_is_just_the_email() {
            let draft: FormDraft =
                [("email".to_string(), DraftValue::Text("a@b.com".into()))]
                    .into_iter()
                    .collect();
            assert_eq!(
                shape_payload(FormKind::Newsletter, &draft),
                json!({"email": "a@b.com"})
            );
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn donation_confirmation_interpolates_the_amount() {
            let draft: FormDraft = [("amount".to_string(), DraftValue::Number(Some(50.0)))]
                .into_iter()
                .collect();
            assert_eq!(
                success_message(FormKind::Donation, &draft),
                "Thank you for your donation of $50.00! Your support makes a difference."
            );
        }

        #[test]
        fn aliases_translate_server_keys_back_to_local_fields() {
            let spec = FormKind::Donation.spec();
            assert_eq!(spec.local_field_for("donor_email"), "email");
            assert_eq!(spec.local_field_for("amount"), "amount");
        }

        #[test]
        fn only_the_newsletter_stays_on_its_view() {
            assert!(FormKind::Donation.spec().returns_home);
            assert!(FormKind::Volunteer.spec().returns_home);
            assert!(FormKind::Contact.spec().returns_home);
            assert!(!FormKind::Newsletter.spec().returns_home);
        }
    }
}
