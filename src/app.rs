//! Application state and core logic

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{ApiClient, ApiClientTrait, ApiError};
use crate::config::TuiConfig;
use crate::state::forms::{FieldValue, Form};
use crate::state::{AppState, HomeFocus, Modal, View, PROGRAMS};
use crate::submit::{
    shape_payload, success_message, FormKind, NETWORK_FAILURE_MESSAGE,
};
use crate::validate::validate;

/// Delay before a successful submission returns the user to the home view
pub const REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// What a form keypress asks the app to do next
enum FormAction {
    None,
    Submit,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client, boxed so tests can substitute a mock
    api: Box<dyn ApiClientTrait>,
    /// Whether the app should quit
    quit: bool,
    /// Deadline for the pending return to the home view, if any
    pending_redirect: Option<Instant>,
}

impl App {
    /// Create a new App instance against the real backend
    pub async fn new(config: &TuiConfig) -> Result<Self> {
        let api = ApiClient::new(config.api_base_url.as_deref())?;
        tracing::debug!(base_url = api.base_url(), "backend client ready");
        let mut app = Self::with_client(Box::new(api));
        if let Some(ms) = config.carousel_interval_ms {
            app.state.carousel.set_interval(Duration::from_millis(ms));
        }
        app.refresh_backend_status().await;
        Ok(app)
    }

    /// Create an App over an arbitrary client implementation
    pub fn with_client(api: Box<dyn ApiClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            api,
            quit: false,
            pending_redirect: None,
        }
    }

    /// Probe the backend and refresh the status-bar indicator and the
    /// home-view stat targets.
    pub async fn refresh_backend_status(&mut self) {
        match self.api.check_health().await {
            Ok(health) => {
                tracing::info!(status = %health.status, "backend reachable");
                self.state.backend_connected = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "backend unreachable");
                self.state.backend_connected = false;
            }
        }

        if self.state.backend_connected {
            if let Ok(data) = self.api.fetch_data().await {
                for (counter, target) in self.state.stats.iter_mut().zip(data) {
                    counter.target = target;
                }
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-driven state: the carousel, the stat counters, and the
    /// pending post-submission return to the home view. The redirect fires
    /// at most once; dismissing the modal beforehand cancels it.
    pub fn tick(&mut self, now: Instant) {
        if self.state.current_view == View::Home {
            self.state.start_stats(now);
            self.state.carousel.tick(now);
        }

        if self.pending_redirect.is_some_and(|deadline| now >= deadline) {
            self.pending_redirect = None;
            self.state.ui.close_modal();
            self.state.navigate(View::Home);
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // An open modal captures input: Enter or Esc dismisses it and
        // cancels any pending redirect.
        if self.state.ui.active_modal().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.pending_redirect = None;
                self.state.ui.close_modal();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => self.state.navigate(View::Home),
            KeyCode::F(2) => self.state.navigate(View::Donate),
            KeyCode::F(3) => self.state.navigate(View::Volunteer),
            KeyCode::F(4) => self.state.navigate(View::Contact),
            KeyCode::F(5) => self.state.navigate(View::Gallery),
            KeyCode::F(6) => self.state.navigate(View::Programs),
            _ => match self.state.current_view {
                View::Home => self.handle_home_key(key).await?,
                View::Donate => self.handle_form_view_key(FormKind::Donation, key).await?,
                View::Volunteer => self.handle_form_view_key(FormKind::Volunteer, key).await?,
                View::Contact => self.handle_form_view_key(FormKind::Contact, key).await?,
                View::Gallery => self.handle_gallery_key(key),
                View::Programs => self.handle_programs_key(key),
            },
        }

        Ok(())
    }

    async fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Tab {
            self.state.home_focus = match self.state.home_focus {
                HomeFocus::Carousel => HomeFocus::Newsletter,
                HomeFocus::Newsletter => HomeFocus::Carousel,
            };
            return Ok(());
        }

        match self.state.home_focus {
            HomeFocus::Carousel => {
                let now = Instant::now();
                match key.code {
                    KeyCode::Left => self.state.carousel.prev(now),
                    KeyCode::Right => self.state.carousel.next(now),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let index = (c as usize) - ('1' as usize);
                        if index < self.state.carousel.slides().len() {
                            self.state.carousel.select(index, now);
                        }
                    }
                    _ => {}
                }
            }
            HomeFocus::Newsletter => match key.code {
                KeyCode::Enter => self.submit_form(FormKind::Newsletter).await?,
                KeyCode::Backspace => {
                    self.state.newsletter_form.email.pop_char();
                }
                KeyCode::Char(c) => {
                    self.state.newsletter_form.email.push_char(c);
                }
                _ => {}
            },
        }

        Ok(())
    }

    async fn handle_form_view_key(&mut self, kind: FormKind, key: KeyEvent) -> Result<()> {
        let action = apply_form_key(self.form_mut(kind), key);
        if matches!(action, FormAction::Submit) {
            self.submit_form(kind).await?;
        }
        Ok(())
    }

    fn handle_gallery_key(&mut self, key: KeyEvent) {
        let gallery = &mut self.state.gallery;

        if gallery.is_lightbox_open() {
            match key.code {
                KeyCode::Esc => gallery.close_lightbox(),
                KeyCode::Left => gallery.lightbox_prev(),
                KeyCode::Right => gallery.lightbox_next(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => gallery.cycle_filter(),
            KeyCode::Left | KeyCode::Up => gallery.cursor_prev(),
            KeyCode::Right | KeyCode::Down => gallery.cursor_next(),
            KeyCode::Enter => gallery.open_lightbox(),
            _ => {}
        }
    }

    fn handle_programs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.programs_prev(),
            KeyCode::Down => self.state.programs_next(),
            KeyCode::Enter => {
                let (name, _) = PROGRAMS[self.state.programs_index];
                self.state.ui.open_modal(Modal::Support {
                    program: capitalize(name),
                });
            }
            _ => {}
        }
    }

    fn form(&self, kind: FormKind) -> &dyn Form {
        match kind {
            FormKind::Donation => &self.state.donation_form,
            FormKind::Volunteer => &self.state.volunteer_form,
            FormKind::Contact => &self.state.contact_form,
            FormKind::Newsletter => &self.state.newsletter_form,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut dyn Form {
        match kind {
            FormKind::Donation => &mut self.state.donation_form,
            FormKind::Volunteer => &mut self.state.volunteer_form,
            FormKind::Contact => &mut self.state.contact_form,
            FormKind::Newsletter => &mut self.state.newsletter_form,
        }
    }

    fn reset_form(&mut self, kind: FormKind) {
        match kind {
            FormKind::Donation => self.state.donation_form.reset(),
            FormKind::Volunteer => self.state.volunteer_form.reset(),
            FormKind::Contact => self.state.contact_form.reset(),
            FormKind::Newsletter => self.state.newsletter_form.reset(),
        }
    }

    /// Run the submission flow for one form: validate, shape, post, then
    /// surface the outcome. Local validation failures never reach the
    /// network.
    pub async fn submit_form(&mut self, kind: FormKind) -> Result<()> {
        let spec = kind.spec();
        let draft = self.form(kind).draft();

        self.state.ui.clear_field_errors();
        let errors = validate(&draft, spec.rules);
        if !errors.is_empty() {
            for (field, message) in errors {
                self.state.ui.set_field_error(&field, message);
            }
            return Ok(());
        }

        self.state.ui.show_loading();
        let payload = shape_payload(kind, &draft);
        let result = self.api.submit(spec.endpoint, payload).await;
        self.state.ui.hide_loading();

        match result {
            Ok(_) => {
                tracing::info!(endpoint = spec.endpoint, "submission accepted");
                self.state.ui.open_modal(Modal::Confirmation {
                    message: success_message(kind, &draft),
                });
                self.reset_form(kind);
                if spec.returns_home {
                    self.pending_redirect = Some(Instant::now() + REDIRECT_DELAY);
                }
            }
            Err(ApiError::ValidationRejected(server_errors)) => {
                for (key, messages) in server_errors {
                    let field = spec.local_field_for(&key).to_string();
                    self.state.ui.set_field_error(&field, messages.join(", "));
                }
            }
            Err(ApiError::NetworkUnavailable(reason)) => {
                tracing::warn!(endpoint = spec.endpoint, %reason, "backend unreachable");
                self.state.ui.open_modal(Modal::Alert {
                    message: NETWORK_FAILURE_MESSAGE.to_string(),
                });
            }
            Err(err) => {
                tracing::warn!(endpoint = spec.endpoint, error = %err, "submission failed");
                self.state.ui.open_modal(Modal::Alert {
                    message: spec.generic_failure.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Apply a keypress to whichever field is active on a form.
fn apply_form_key(form: &mut dyn Form, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if form.is_submit_row_active() {
                return FormAction::Submit;
            }
            let multiline = form
                .get_active_field_mut()
                .map(|field| field.is_multiline)
                .unwrap_or(false);
            if multiline {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char('\n');
                }
            } else {
                form.next_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = form.get_active_field_mut() {
                field.pop_char();
            }
        }
        KeyCode::Left => {
            if let Some(field) = form.get_active_field_mut() {
                field.cycle_left();
            }
        }
        KeyCode::Right => {
            if let Some(field) = form.get_active_field_mut() {
                field.cycle_right();
            }
        }
        KeyCode::Char(' ') => {
            if let Some(field) = form.get_active_field_mut() {
                match field.value {
                    FieldValue::Checkbox(_) | FieldValue::MultiSelect { .. } => field.toggle(),
                    _ => field.push_char(' '),
                }
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = form.get_active_field_mut() {
                field.push_char(c);
            }
        }
        _ => {}
    }
    FormAction::None
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
