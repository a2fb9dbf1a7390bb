//! Form state: field value objects and per-page form structs

mod field;
mod form_state;

pub use field::{FieldValue, FormField, AMOUNT_PRESETS};
pub use form_state::{ContactForm, DonationForm, Form, NewsletterForm, VolunteerForm};
