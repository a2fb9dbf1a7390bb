//! Home view: hero carousel, impact counters, newsletter signup

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::forms::draw_field;
use crate::app::App;
use crate::state::HomeFocus;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Carousel
            Constraint::Length(1), // Indicators
            Constraint::Length(4), // Stat counters
            Constraint::Length(3), // Newsletter signup
        ])
        .split(area);

    draw_carousel(frame, chunks[0], app);
    draw_indicators(frame, chunks[1], app);
    draw_stats(frame, chunks[2], app);
    draw_newsletter(frame, chunks[3], app);
}

fn draw_carousel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.home_focus == HomeFocus::Carousel;
    let slide = app.state.carousel.current_slide();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let vertical_pad = inner.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::from(""); vertical_pad as usize];
    lines.push(
        Line::from(Span::styled(
            slide.title.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.push(Line::from(Span::styled(slide.caption.clone(), Style::default().fg(Color::Gray))).centered());

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_indicators(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.carousel.current_index();
    let spans: Vec<Span> = (0..app.state.carousel.slides().len())
        .map(|index| {
            if index == current {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.stats.is_empty() {
        return;
    }
    let constraints =
        vec![Constraint::Ratio(1, app.state.stats.len() as u32); app.state.stats.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let now = Instant::now();
    for (counter, column) in app.state.stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                counter.display(now),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                counter.label.clone(),
                Style::default().fg(Color::Gray),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

fn draw_newsletter(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.home_focus == HomeFocus::Newsletter;
    draw_field(
        frame,
        area,
        &app.state.newsletter_form.email,
        focused,
        app.state.ui.field_error("email"),
    );
}
