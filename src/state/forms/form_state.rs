//! Form state management and form structs
//!
//! One struct per page form. Each form owns its fields, tracks the active
//! field index, and exposes a draft snapshot for validation and payload
//! shaping. The last index is the submit row, which has no `FormField`.

use super::field::FormField;
use crate::validate::FormDraft;

const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("credit_card", "Credit card"),
    ("paypal", "PayPal"),
    ("bank_transfer", "Bank transfer"),
];

const DONATION_TYPES: &[(&str, &str)] = &[("one_time", "One time"), ("monthly", "Monthly")];

const VOLUNTEER_INTERESTS: &[&str] = &["education", "health", "community", "events", "fundraising"];

const VOLUNTEER_AVAILABILITY: &[&str] = &["weekdays", "weekends", "mornings", "evenings"];

const COMMITMENT_LEVELS: &[(&str, &str)] = &[
    ("occasional", "Occasional"),
    ("regular", "Regular"),
    ("full_time", "Full time"),
];

/// Trait for common form operations
pub trait Form {
    /// Number of rows, including the trailing submit row
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// True while the submit row is focused
    fn is_submit_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    /// Snapshot every field for validation and payload shaping
    fn draft(&self) -> FormDraft {
        let mut draft = FormDraft::new();
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field(index) {
                draft.insert(field.name.clone(), field.draft_value());
            }
        }
        draft
    }
}

// Donation form
#[derive(Debug, Clone)]
pub struct DonationForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub amount: FormField,
    pub payment_method: FormField,
    pub donation_type: FormField,
    pub anonymous: FormField,
    pub active_field_index: usize,
}

impl DonationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full name", false),
            email: FormField::text("email", "Email", false),
            phone: FormField::text("phone", "Phone (optional)", false),
            amount: FormField::amount("amount", "Amount (USD)"),
            payment_method: FormField::select("payment_method", "Payment method", PAYMENT_METHODS),
            donation_type: FormField::select("donation_type", "Donation type", DONATION_TYPES),
            anonymous: FormField::checkbox("anonymous", "Give anonymously"),
            active_field_index: 0,
        }
    }

    /// Reset every field to its default, including the featured amount.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DonationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for DonationForm {
    fn field_count(&self) -> usize {
        8 // seven fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(7);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.amount),
            4 => Some(&mut self.payment_method),
            5 => Some(&mut self.donation_type),
            6 => Some(&mut self.anonymous),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.amount),
            4 => Some(&self.payment_method),
            5 => Some(&self.donation_type),
            6 => Some(&self.anonymous),
            _ => None,
        }
    }
}

// Volunteer application form
#[derive(Debug, Clone)]
pub struct VolunteerForm {
    pub name: FormField,
    pub email: FormField,
    pub age: FormField,
    pub phone: FormField,
    pub occupation: FormField,
    pub skills: FormField,
    pub interests: FormField,
    pub availability: FormField,
    pub commitment_level: FormField,
    pub motivation: FormField,
    pub start_date: FormField,
    pub active_field_index: usize,
}

impl VolunteerForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Full name", false),
            email: FormField::text("email", "Email", false),
            age: FormField::number("age", "Age"),
            phone: FormField::text("phone", "Phone (optional)", false),
            occupation: FormField::text("occupation", "Occupation", false),
            skills: FormField::text("skills", "Skills", false),
            interests: FormField::multi_select("interests", "Interests", VOLUNTEER_INTERESTS),
            availability: FormField::multi_select(
                "availability",
                "Availability",
                VOLUNTEER_AVAILABILITY,
            ),
            commitment_level: FormField::select(
                "commitment_level",
                "Commitment level",
                COMMITMENT_LEVELS,
            ),
            motivation: FormField::text("motivation", "Why do you want to volunteer?", true),
            start_date: FormField::text("start_date", "Start date (YYYY-MM-DD)", false),
            active_field_index: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for VolunteerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for VolunteerForm {
    fn field_count(&self) -> usize {
        12
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(11);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.age),
            3 => Some(&mut self.phone),
            4 => Some(&mut self.occupation),
            5 => Some(&mut self.skills),
            6 => Some(&mut self.interests),
            7 => Some(&mut self.availability),
            8 => Some(&mut self.commitment_level),
            9 => Some(&mut self.motivation),
            10 => Some(&mut self.start_date),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.age),
            3 => Some(&self.phone),
            4 => Some(&self.occupation),
            5 => Some(&self.skills),
            6 => Some(&self.interests),
            7 => Some(&self.availability),
            8 => Some(&self.commitment_level),
            9 => Some(&self.motivation),
            10 => Some(&self.start_date),
            _ => None,
        }
    }
}

// Contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            phone: FormField::text("phone", "Phone (optional)", false),
            subject: FormField::text("subject", "Subject", false),
            message: FormField::text("message", "Message", true),
            active_field_index: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.subject),
            4 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.subject),
            4 => Some(&self.message),
            _ => None,
        }
    }
}

// Newsletter signup (single email field in the Home footer)
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: FormField,
    pub active_field_index: usize,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email", false),
            active_field_index: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NewsletterForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
}
