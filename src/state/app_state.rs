//! Top-level application state

use std::time::Instant;

use crate::state::carousel::{CarouselState, Slide};
use crate::state::forms::{ContactForm, DonationForm, NewsletterForm, VolunteerForm};
use crate::state::gallery::{GalleryItem, GalleryState};
use crate::state::stats::StatCounter;
use crate::state::ui_state::UiState;

/// The top-level views, one per nav tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Donate,
    Volunteer,
    Contact,
    Gallery,
    Programs,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Donate,
        View::Volunteer,
        View::Contact,
        View::Gallery,
        View::Programs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Donate => "Donate",
            View::Volunteer => "Volunteer",
            View::Contact => "Contact",
            View::Gallery => "Gallery",
            View::Programs => "Programs",
        }
    }
}

/// Which home-view widget receives form-style input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Carousel,
    Newsletter,
}

/// Programs listed on the programs view. Enter opens a support prompt for
/// the highlighted one.
pub const PROGRAMS: [(&str, &str); 4] = [
    (
        "education",
        "Scholarships, school supplies, and literacy workshops for underserved children.",
    ),
    (
        "health",
        "Mobile clinics, vaccination drives, and health education in rural communities.",
    ),
    (
        "community",
        "Clean water projects, food banks, and neighborhood rebuilding efforts.",
    ),
    (
        "events",
        "Fundraising runs, benefit concerts, and volunteer appreciation days.",
    ),
];

pub struct AppState {
    pub current_view: View,
    pub ui: UiState,
    pub donation_form: DonationForm,
    pub volunteer_form: VolunteerForm,
    pub contact_form: ContactForm,
    pub newsletter_form: NewsletterForm,
    pub carousel: CarouselState,
    pub gallery: GalleryState,
    pub stats: Vec<StatCounter>,
    pub backend_connected: bool,
    pub home_focus: HomeFocus,
    pub programs_index: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_view: View::Home,
            ui: UiState::new(),
            donation_form: DonationForm::new(),
            volunteer_form: VolunteerForm::new(),
            contact_form: ContactForm::new(),
            newsletter_form: NewsletterForm::new(),
            carousel: CarouselState::new(default_slides()),
            gallery: GalleryState::new(default_gallery_items()),
            stats: default_stats(),
            backend_connected: false,
            home_focus: HomeFocus::Carousel,
            programs_index: 0,
        }
    }

    /// Switch views. Inline errors belong to the form being edited, so
    /// leaving a view discards them rather than letting them surface on
    /// an unrelated form's field of the same name.
    pub fn navigate(&mut self, view: View) {
        if view != self.current_view {
            self.ui.clear_field_errors();
        }
        self.current_view = view;
    }

    pub fn programs_next(&mut self) {
        self.programs_index = (self.programs_index + 1) % PROGRAMS.len();
    }

    pub fn programs_prev(&mut self) {
        self.programs_index = if self.programs_index == 0 {
            PROGRAMS.len() - 1
        } else {
            self.programs_index - 1
        };
    }

    /// Kick off the home-view counters the first time they are shown.
    pub fn start_stats(&mut self, now: Instant) {
        for counter in &mut self.stats {
            if !counter.is_started() {
                counter.start(now);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Empowering Communities",
            "Together we build brighter futures",
        ),
        Slide::new("Education for All", "Every child deserves a chance to learn"),
        Slide::new("Health & Wellness", "Bringing care to those who need it most"),
    ]
}

fn default_gallery_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new(
            "New Classroom Opening",
            "A freshly built classroom welcomes its first students.",
            "education",
        ),
        GalleryItem::new(
            "Literacy Workshop",
            "Volunteers run weekend reading sessions.",
            "education",
        ),
        GalleryItem::new(
            "Mobile Clinic Visit",
            "Free checkups for families in remote villages.",
            "health",
        ),
        GalleryItem::new(
            "Vaccination Drive",
            "Hundreds of children protected in a single weekend.",
            "health",
        ),
        GalleryItem::new(
            "Clean Water Project",
            "A new well brings safe drinking water to the village.",
            "community",
        ),
        GalleryItem::new(
            "Neighborhood Rebuild",
            "Families and volunteers restoring storm-damaged homes.",
            "community",
        ),
        GalleryItem::new(
            "Charity Fun Run",
            "Runners raising funds for next year's programs.",
            "events",
        ),
        GalleryItem::new(
            "Volunteer Appreciation Day",
            "Celebrating the people who make it all happen.",
            "events",
        ),
    ]
}

fn default_stats() -> Vec<StatCounter> {
    vec![
        StatCounter::new("Lives Impacted", 1500.0, "+"),
        StatCounter::new("Active Volunteers", 320.0, "+"),
        StatCounter::new("Projects Completed", 45.0, ""),
        StatCounter::new("Communities Served", 12.0, ""),
    ]
}
