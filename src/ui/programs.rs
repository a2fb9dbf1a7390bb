//! Programs view: browse programs and open the support prompt

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::PROGRAMS;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Program list
            Constraint::Min(0),     // Description
        ])
        .split(area);

    draw_list(frame, chunks[0], app);
    draw_description(frame, chunks[1], app);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = PROGRAMS
        .iter()
        .map(|(name, _)| ListItem::new(name.to_string()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Programs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.state.programs_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_description(frame: &mut Frame, area: Rect, app: &App) {
    let (name, description) = PROGRAMS[app.state.programs_index];

    let lines = vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(description),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to support this program",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
