//! UI module for rendering the TUI

mod components;
mod forms;
mod gallery;
mod home;
mod layout;
mod programs;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, content_area, app),
        View::Donate => forms::draw_form(
            frame,
            content_area,
            "Make a Donation",
            &app.state.donation_form,
            &app.state.ui,
        ),
        View::Volunteer => forms::draw_form(
            frame,
            content_area,
            "Volunteer With Us",
            &app.state.volunteer_form,
            &app.state.ui,
        ),
        View::Contact => forms::draw_form(
            frame,
            content_area,
            "Get In Touch",
            &app.state.contact_form,
            &app.state.ui,
        ),
        View::Gallery => gallery::draw(frame, content_area, app),
        View::Programs => programs::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays draw last so they sit above the view content.
    if app.state.ui.is_loading() {
        components::draw_loading(frame);
    }
    if let Some(modal) = app.state.ui.active_modal() {
        components::draw_modal(frame, modal);
    }
}
