//! Layout components (nav bar and status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::View;

/// Split the screen into nav bar, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the top navigation tabs
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Outreach ",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    for (index, view) in View::ALL.iter().enumerate() {
        let label = format!(" F{} {} ", index + 1, view.label());
        let style = if *view == app.state.current_view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(nav, area);
}

/// Draw the bottom status bar with the backend indicator and view hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let conn_status = if app.state.backend_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Black)));

    spans.push(Span::styled(
        " | ^C:quit ",
        Style::default().fg(Color::Black),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Home => "Tab:focus ←→:slides 1-3:jump Enter:subscribe",
        View::Donate | View::Volunteer | View::Contact => {
            "Tab/↑↓:fields ←→:options Space:toggle Enter:submit"
        }
        View::Gallery => "Tab:filter ←→:browse Enter:open Esc:close",
        View::Programs => "↑↓:browse Enter:support",
    }
}
