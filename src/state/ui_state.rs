//! Transient presentation state: loading overlay, modals, inline field errors
//!
//! All operations are idempotent and presentation-only; the submission
//! coordinator drives them but no network or validation logic lives here.

use std::collections::BTreeMap;

/// Modal overlays. At most one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Post-submission confirmation
    Confirmation { message: String },
    /// Generic failure or network alert
    Alert { message: String },
    /// Program support prompt
    Support { program: String },
}

/// Transient UI flags, owned by the app and mutated only through these
/// operations. Reset between flows by the coordinator.
#[derive(Debug, Default)]
pub struct UiState {
    loading: bool,
    active_modal: Option<Modal>,
    field_errors: BTreeMap<String, String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Open a modal, replacing any modal already open.
    pub fn open_modal(&mut self, modal: Modal) {
        self.active_modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn active_modal(&self) -> Option<&Modal> {
        self.active_modal.as_ref()
    }

    pub fn set_field_error(&mut self, field: &str, message: String) {
        self.field_errors.insert(field.to_string(), message);
    }

    #[allow(dead_code)]
    pub fn clear_field_error(&mut self, field: &str) {
        self.field_errors.remove(field);
    }

    pub fn clear_field_errors(&mut self) {
        self.field_errors.clear();
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}
